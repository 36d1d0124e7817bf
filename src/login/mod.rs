//! Login action boundary and the `cf` CLI implementation.

use std::process::Command;

use tracing::debug;

use crate::{config::Profile, errors::LoginError};

/// External authentication capability.
///
/// Takes the five positional values of a resolved profile and reports pass
/// or fail with a descriptive message. Implemented by the real `cf` CLI in
/// production and by recording fakes in tests.
pub trait LoginAction {
    fn login(
        &self,
        target: &str,
        username: &str,
        password: &str,
        org: &str,
        space: &str,
    ) -> Result<(), String>;
}

/// Hand the profile's five fields to the action, positionally and unchanged.
///
/// No retries, no transformation; a reported failure is propagated as-is.
pub fn invoke(action: &dyn LoginAction, profile: &Profile) -> Result<(), LoginError> {
    action
        .login(
            &profile.target,
            &profile.username,
            &profile.password,
            &profile.org,
            &profile.space,
        )
        .map_err(|message| LoginError::Failed { message })
}

/// Production action: spawns `cf login` with the profile's coordinates.
#[derive(Debug, Default)]
pub struct CfCliLogin;

impl LoginAction for CfCliLogin {
    fn login(
        &self,
        target: &str,
        username: &str,
        password: &str,
        org: &str,
        space: &str,
    ) -> Result<(), String> {
        let mut command = Command::new("cf");
        command
            .arg("login")
            .args(["-a", target])
            .args(["-u", username])
            .args(["-p", password])
            .args(["-o", org])
            .args(["-s", space]);

        debug!(
            target: "cflogin::login",
            cf_target = target,
            username = username,
            org = org,
            space = space,
            "Invoking cf login"
        );

        let status = command
            .status()
            .map_err(|err| format!("could not run `cf`: {err}"))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("`cf login` exited with {status}"))
        }
    }
}
