use std::process::Command;

use crate::error::PbcopyError;

/// Looks up the full command line of a running process
pub trait ProcessTable {
    fn command_line(&self, pid: &str) -> Result<String, PbcopyError>;
}

/// Queries the process table through `ps -p <pid> -o command=`
#[derive(Debug, Default, Clone, Copy)]
pub struct PsProcessTable;

impl ProcessTable for PsProcessTable {
    fn command_line(&self, pid: &str) -> Result<String, PbcopyError> {
        if pid.is_empty() || !pid.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PbcopyError::ProcessQuery(format!("invalid pid {:?}", pid)));
        }

        let ps = which::which("ps").map_err(|e| PbcopyError::ProcessQuery(e.to_string()))?;
        let output = Command::new(ps)
            .args(["-p", pid, "-o", "command="])
            .output()
            .map_err(|e| PbcopyError::ProcessQuery(e.to_string()))?;

        // ps exits non-zero when the pid does not exist
        if !output.status.success() {
            return Err(PbcopyError::ProcessQuery(format!(
                "ps -p {} exited with {}",
                pid, output.status
            )));
        }

        let command = String::from_utf8_lossy(&output.stdout);
        Ok(command.trim_end_matches(['\n', '\r']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_numeric_pid() {
        let result = PsProcessTable.command_line("12a");
        assert!(matches!(result, Err(PbcopyError::ProcessQuery(_))));
    }

    #[test]
    fn test_rejects_empty_pid() {
        let result = PsProcessTable.command_line("");
        assert!(matches!(result, Err(PbcopyError::ProcessQuery(_))));
    }

    #[test]
    fn test_own_process_or_unavailable() {
        let pid = std::process::id().to_string();
        match PsProcessTable.command_line(&pid) {
            Ok(command) => assert!(!command.ends_with('\n')),
            // ps may be missing in minimal containers
            Err(e) => assert!(matches!(e, PbcopyError::ProcessQuery(_))),
        }
    }
}
