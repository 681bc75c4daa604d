/// Remotely invocable methods of `demo.calculator.Calculator`.
///
/// The set is fixed; each variant maps statically to its gRPC route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Add,
    Ping,
}

impl Method {
    /// Method name as declared in the service definition.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Method::Add => "Add",
            Method::Ping => "Ping",
        }
    }

    /// Full gRPC path, `/<package>.<service>/<method>`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Method::Add => "/demo.calculator.Calculator/Add",
            Method::Ping => "/demo.calculator.Calculator/Ping",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::SERVICE_NAME;

    #[test]
    fn test_paths_follow_service_name() {
        for method in [Method::Add, Method::Ping] {
            assert_eq!(method.path(), format!("/{SERVICE_NAME}/{}", method.name()));
        }
    }

    #[test]
    fn test_display_is_method_name() {
        assert_eq!(Method::Add.to_string(), "Add");
        assert_eq!(Method::Ping.to_string(), "Ping");
    }
}
