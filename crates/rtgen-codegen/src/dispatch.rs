/// A generated `inline void` function that switches on `RestrictedTraceID`
/// and forwards to the matching per-trace function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchFunction {
    /// Name of the generated function in namespace `angle`
    pub name: &'static str,
    /// Parameters following `RestrictedTraceID traceID`
    pub params: &'static str,
    /// Function called in each trace's namespace
    pub trace_function: &'static str,
    /// Arguments forwarded to `trace_function`
    pub args: &'static str,
}

pub const DISPATCH_FUNCTIONS: [DispatchFunction; 5] = [
    DispatchFunction {
        name: "ReplayFrame",
        params: "uint32_t frameIndex",
        trace_function: "ReplayContext1Frame",
        args: "frameIndex",
    },
    DispatchFunction {
        name: "SetupReplay",
        params: "",
        trace_function: "SetupContext1Replay",
        args: "",
    },
    DispatchFunction {
        name: "SetBinaryDataDir",
        params: "const char *dataDir",
        trace_function: "SetBinaryDataDir",
        args: "dataDir",
    },
    DispatchFunction {
        name: "SetBinaryDataDecompressCallback",
        params: "DecompressCallback callback",
        trace_function: "SetBinaryDataDecompressCallback",
        args: "callback",
    },
    DispatchFunction {
        name: "SetFramebufferChangeCallback",
        params: "void *userData, FramebufferChangeCallback callback",
        trace_function: "SetFramebufferChangeCallback",
        args: "userData, callback",
    },
];

impl DispatchFunction {
    /// One `case` line per trace, in trace order.
    pub fn cases(&self, traces: &[String]) -> Vec<String> {
        traces
            .iter()
            .map(|trace| {
                format!(
                    "case RestrictedTraceID::{trace}: {trace}::{}({}); break;",
                    self.trace_function, self.args
                )
            })
            .collect()
    }

    pub fn signature(&self) -> String {
        if self.params.is_empty() {
            format!("inline void {}(RestrictedTraceID traceID)", self.name)
        } else {
            format!(
                "inline void {}(RestrictedTraceID traceID, {})",
                self.name, self.params
            )
        }
    }

    /// The full function definition.
    pub fn render(&self, traces: &[String]) -> String {
        let mut lines = vec![
            self.signature(),
            "{".to_string(),
            "    switch (traceID)".to_string(),
            "    {".to_string(),
        ];
        lines.extend(self.cases(traces));
        lines.extend(
            [
                "        default:",
                "            fprintf(stderr, \"Error in switch.\\n\");",
                "            assert(0);",
                "            break;",
                "    }",
                "}",
            ]
            .map(String::from),
        );
        lines.join("\n")
    }
}
