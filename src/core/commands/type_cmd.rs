use std::ffi::OsString;
use std::io::Write;

use super::{write_os, Builtin, Command, CommandError, Flow};
use crate::path;

/// Reports whether a name is a builtin or which executable it resolves to.
#[derive(Clone, Default)]
pub struct TypeCommand;

impl TypeCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for TypeCommand {
    fn execute(&self, args: &[OsString], out: &mut dyn Write) -> Result<Flow, CommandError> {
        let name = args.first().ok_or(CommandError::MissingOperand("type"))?;

        if Builtin::from_os_name(name).is_some() {
            write_os(out, name)?;
            writeln!(out, " is a shell builtin")?;
        } else if let Some(resolved) = path::which(name) {
            write_os(out, name)?;
            out.write_all(b" is ")?;
            write_os(out, resolved.as_os_str())?;
            writeln!(out)?;
        } else {
            return Err(CommandError::NotFound(name.to_string_lossy().into_owned()));
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::env_lock;

    fn run(args: &[&str]) -> (Result<Flow, CommandError>, String) {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        let mut out = Vec::new();
        let result = TypeCommand::new().execute(&args, &mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_type_builtins() {
        for builtin in Builtin::ALL {
            let (result, out) = run(&[builtin.name()]);
            assert!(result.is_ok());
            assert_eq!(out, format!("{} is a shell builtin\n", builtin.name()));
        }
    }

    #[test]
    fn test_type_not_found() {
        let _guard = env_lock();
        let (result, out) = run(&["minish-definitely-missing"]);
        let err = result.unwrap_err();

        assert!(out.is_empty());
        assert!(err.reports_on_stdout());
        assert_eq!(err.to_string(), "minish-definitely-missing: not found");
    }

    #[test]
    fn test_type_missing_operand() {
        let (result, _) = run(&[]);
        assert_eq!(result.unwrap_err().to_string(), "type: missing operand");
    }

    #[cfg(unix)]
    #[test]
    fn test_type_resolves_from_path() {
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let _guard = env_lock();
        let dir = TempDir::new().unwrap();
        let tool = dir.path().join("minish-tool");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let saved = std::env::var_os("PATH");
        std::env::set_var("PATH", dir.path());
        let (result, out) = run(&["minish-tool"]);
        match saved {
            Some(value) => std::env::set_var("PATH", value),
            None => std::env::remove_var("PATH"),
        }

        assert!(result.is_ok());
        assert_eq!(out, format!("minish-tool is {}\n", tool.display()));
    }
}
