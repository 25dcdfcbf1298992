use crate::context::FormatContext;
use crate::traits::Renderer;

/// GN variable holding the trace list
pub const LIST_VARIABLE: &str = "angle_restricted_traces";

/// Renders the `.gni` build fragment.
#[derive(Debug, Clone)]
pub struct GniRenderer {
    file_name: String,
}

impl GniRenderer {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Renderer for GniRenderer {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, traces: &[String], ctx: &FormatContext) -> String {
        let test_list = traces
            .iter()
            .map(|trace| format!("\"{trace}\""))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            r#"# GENERATED FILE - DO NOT EDIT.
# Generated by {script_name} using data from {data_source_name}
#
# Copyright 2020 The ANGLE Project Authors. All rights reserved.
# Use of this source code is governed by a BSD-style license that can be
# found in the LICENSE file.
#
# A list of all restricted trace tests. Can be consumed by tests/BUILD.gn.

{LIST_VARIABLE} = [
{test_list}
]
"#,
            script_name = ctx.script_name,
            data_source_name = ctx.data_source_name,
        )
    }
}
