/// Capacity of the generated `TraceInfo::name` buffer, NUL terminator included.
pub const MAX_NAME_LEN: usize = 32;

/// The parsed contents of `restricted_traces.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    /// Trace identifiers, in manifest order
    pub traces: Vec<String>,
}

impl Manifest {
    pub fn new<I, S>(traces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            traces: traces.into_iter().map(Into::into).collect(),
        }
    }

    pub fn traces(&self) -> &[String] {
        &self.traces
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_keeps_order() {
        let manifest = Manifest::new(["trex", "manhattan_10", "egypt_1500"]);
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.traces()[0], "trex");
        assert_eq!(manifest.traces()[2], "egypt_1500");
    }
}
