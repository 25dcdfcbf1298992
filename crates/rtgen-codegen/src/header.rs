use crate::context::FormatContext;
use crate::dispatch::DISPATCH_FUNCTIONS;
use crate::traits::Renderer;

/// Renders `restricted_traces_autogen.h`.
///
/// The enum lists traces in manifest order with no explicit values, so each
/// trace's implicit value is its manifest index and `InvalidEnum` equals the
/// number of traces.
#[derive(Debug, Clone)]
pub struct HeaderRenderer {
    file_name: String,
}

impl HeaderRenderer {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// `#include` of the trace's own capture header
pub fn include_line(trace: &str) -> String {
    format!("#include \"{trace}/{trace}_capture_context1.h\"")
}

/// `kTraceInfos` entry for a trace
pub fn trace_info_entry(trace: &str) -> String {
    format!(
        "{{RestrictedTraceID::{trace}, {{{trace}::kReplayFrameStart, {trace}::kReplayFrameEnd, \"{trace}\"}}}}"
    )
}

/// Body of `enum class RestrictedTraceID`: traces then the two sentinels.
pub fn enum_body(traces: &[String]) -> String {
    const SENTINELS: &str = "InvalidEnum, EnumCount = InvalidEnum";
    if traces.is_empty() {
        SENTINELS.to_string()
    } else {
        format!("{}, {SENTINELS}", traces.join(",\n"))
    }
}

impl Renderer for HeaderRenderer {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, traces: &[String], ctx: &FormatContext) -> String {
        let includes = traces
            .iter()
            .map(|t| include_line(t))
            .collect::<Vec<_>>()
            .join("\n");
        let trace_ids = enum_body(traces);
        let trace_infos = traces
            .iter()
            .map(|t| trace_info_entry(t))
            .collect::<Vec<_>>()
            .join(",\n");
        let dispatch_functions = DISPATCH_FUNCTIONS
            .iter()
            .map(|f| f.render(traces))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"// GENERATED FILE - DO NOT EDIT.
// Generated by {script_name} using data from {data_source_name}
//
// Copyright 2020 The ANGLE Project Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.
//
// Types and enumerations for trace tests.

#ifndef ANGLE_RESTRICTED_TRACES_H_
#define ANGLE_RESTRICTED_TRACES_H_

{includes}

namespace angle
{{
enum class RestrictedTraceID
{{
{trace_ids}
}};

using ReplayFunc = void (*)(uint32_t);
using SetupFunc = void (*)();
using DecompressFunc = uint8_t *(*)(const std::vector<uint8_t> &);
using SetBinaryDataDirFunc = void (*)(const char *);

static constexpr size_t kTraceInfoMaxNameLen = {max_name_len};

struct TraceInfo
{{
    uint32_t startFrame;
    uint32_t endFrame;
    char name[kTraceInfoMaxNameLen];
}};

constexpr angle::PackedEnumMap<RestrictedTraceID, TraceInfo> kTraceInfos = {{
{trace_infos}
}};

using DecompressCallback = uint8_t *(*)(const std::vector<uint8_t> &);
using FramebufferChangeCallback = void(*)(void *userData, GLenum target, GLuint framebuffer);

{dispatch_functions}
}}  // namespace angle

#endif  // ANGLE_RESTRICTED_TRACES_H_
"#,
            script_name = ctx.script_name,
            data_source_name = ctx.data_source_name,
            max_name_len = rtgen_manifest::MAX_NAME_LEN,
        )
    }
}
