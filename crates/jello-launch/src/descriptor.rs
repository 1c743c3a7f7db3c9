//! Adapter descriptor construction
//!
//! Maps a [`ResolvedLaunch`] plus the settings layer to the exact process
//! invocation the host spawns. Pure over its inputs and the captured base
//! environment; performs no I/O and cannot fail.

use crate::resolve::ResolvedLaunch;
use jello_launch_config::constants::{
    DEBUGGER_FLAG, ENV_DAP_EXCEPTION, ENV_DAP_PAUSE_ALL, ENV_JELLO_PATH,
};
use jello_launch_config::DebuggerSettings;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

/// Everything the host needs to spawn the VM as a debug adapter.
///
/// The spawned process is expected to use stdin/stdout exclusively for DAP
/// framing; the debuggee's own output goes to stderr. That contract lives on
/// the VM side and is not enforced by redirection here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessDescriptor {
    /// Executable to spawn
    pub program: PathBuf,
    /// Ordered argument vector; the mode flag must precede the artifact path
    pub args: Vec<String>,
    /// Working directory
    pub cwd: PathBuf,
    /// Full child environment (ambient, overridden with session keys)
    pub env: HashMap<String, String>,
}

impl ProcessDescriptor {
    /// Build a descriptor, inheriting the ambient process environment.
    pub fn build(resolved: &ResolvedLaunch, settings: &DebuggerSettings) -> Self {
        Self::build_with_env(resolved, settings, std::env::vars().collect())
    }

    /// Build a descriptor over an explicit base environment.
    ///
    /// Session-specific keys override any ambient values of the same name.
    pub fn build_with_env(
        resolved: &ResolvedLaunch,
        settings: &DebuggerSettings,
        mut env: HashMap<String, String>,
    ) -> Self {
        if let Some(lib) = resolved
            .lib_path
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
        {
            env.insert(
                ENV_JELLO_PATH.to_string(),
                lib.to_string_lossy().into_owned(),
            );
        }

        env.insert(
            ENV_DAP_PAUSE_ALL.to_string(),
            if settings.pause_all_actors { "1" } else { "0" }.to_string(),
        );

        // Initial value only; the editor may override it through its own
        // exception-breakpoint configuration after protocol negotiation.
        env.insert(
            ENV_DAP_EXCEPTION.to_string(),
            settings.exception_breakpoints.as_str().to_string(),
        );

        let args = vec![
            DEBUGGER_FLAG.to_string(),
            resolved.program_to_run.to_string_lossy().into_owned(),
        ];

        Self {
            program: resolved.tool_path.clone(),
            args,
            cwd: resolved.cwd.clone(),
            env,
        }
    }

    /// Ready-to-spawn command for this descriptor.
    ///
    /// The child environment is replaced wholesale with the descriptor's
    /// environment map, which already contains the inherited variables.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(&self.cwd)
            .env_clear()
            .envs(&self.env);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jello_launch_config::ExceptionMode;

    fn sample_resolved() -> ResolvedLaunch {
        ResolvedLaunch {
            tool_path: PathBuf::from("/opt/jello/bin/jello"),
            cwd: PathBuf::from("/ws"),
            program_to_run: PathBuf::from("/ws/app.jlo"),
            lib_path: None,
        }
    }

    #[test]
    fn test_argument_order_is_mode_flag_then_artifact() {
        let descriptor = ProcessDescriptor::build_with_env(
            &sample_resolved(),
            &DebuggerSettings::default(),
            HashMap::new(),
        );
        assert_eq!(descriptor.program, PathBuf::from("/opt/jello/bin/jello"));
        assert_eq!(descriptor.args, vec!["-debugger", "/ws/app.jlo"]);
        assert_eq!(descriptor.cwd, PathBuf::from("/ws"));
    }

    #[test]
    fn test_default_settings_encoded_in_environment() {
        let descriptor = ProcessDescriptor::build_with_env(
            &sample_resolved(),
            &DebuggerSettings::default(),
            HashMap::new(),
        );
        assert_eq!(descriptor.env["JELLO_DAP_PAUSE_ALL"], "1");
        assert_eq!(descriptor.env["JELLO_DAP_EXCEPTION"], "uncaught");
        assert!(!descriptor.env.contains_key("JELLO_PATH"));
    }

    #[test]
    fn test_pause_and_exception_settings_encoded() {
        let settings = DebuggerSettings {
            pause_all_actors: false,
            exception_breakpoints: ExceptionMode::Never,
            ..Default::default()
        };
        let descriptor =
            ProcessDescriptor::build_with_env(&sample_resolved(), &settings, HashMap::new());
        assert_eq!(descriptor.env["JELLO_DAP_PAUSE_ALL"], "0");
        assert_eq!(descriptor.env["JELLO_DAP_EXCEPTION"], "never");
    }

    #[test]
    fn test_lib_path_overrides_ambient_jello_path() {
        let resolved = ResolvedLaunch {
            lib_path: Some(PathBuf::from("/ws/libs")),
            ..sample_resolved()
        };
        let base: HashMap<String, String> = [
            ("JELLO_PATH".to_string(), "/ambient/root".to_string()),
            ("HOME".to_string(), "/home/dev".to_string()),
        ]
        .into();
        let descriptor =
            ProcessDescriptor::build_with_env(&resolved, &DebuggerSettings::default(), base);
        assert_eq!(descriptor.env["JELLO_PATH"], "/ws/libs");
        // Ambient variables are inherited
        assert_eq!(descriptor.env["HOME"], "/home/dev");
    }

    #[test]
    fn test_ambient_jello_path_kept_without_lib_path() {
        let base: HashMap<String, String> =
            [("JELLO_PATH".to_string(), "/ambient/root".to_string())].into();
        let descriptor =
            ProcessDescriptor::build_with_env(&sample_resolved(), &DebuggerSettings::default(), base);
        assert_eq!(descriptor.env["JELLO_PATH"], "/ambient/root");
    }

    #[test]
    fn test_descriptor_serializes_to_json() {
        let descriptor = ProcessDescriptor::build_with_env(
            &sample_resolved(),
            &DebuggerSettings::default(),
            HashMap::new(),
        );
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["program"], "/opt/jello/bin/jello");
        assert_eq!(json["args"][0], "-debugger");
        assert_eq!(json["args"][1], "/ws/app.jlo");
    }
}
