/// Scene-construction state machine
///
/// Every Renderer call is checked against an explicit transition table,
/// in debug and release builds alike. A call issued in the wrong state
/// returns `Error::ProtocolViolation` and leaves the state untouched.
///
/// ```text
/// init          : Uninitialized            -> Initialized
/// begin_scene   : Initialized | Idle       -> BuildingScene
/// submit_*      : BuildingScene            -> BuildingScene
/// end_scene     : BuildingScene            -> Idle
/// draw          : Idle                     -> Idle
/// maintenance   : any initialized state    -> unchanged
/// ```

use crate::error::{Error, Result};
use crate::engine_error;

/// Where the renderer is in the scene-construction cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneState {
    /// `init` has not succeeded yet
    Uninitialized,
    /// Device resources exist, no scene was ever begun
    Initialized,
    /// Between `begin_scene` and `end_scene`
    BuildingScene,
    /// A finalized scene is ready to draw
    Idle,
}

/// Renderer call subject to the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneOperation {
    Init,
    BeginScene,
    /// Any `submit_*` call, named after the method
    Submit(&'static str),
    EndScene,
    /// Drop the scene being built (failed traversal or upload)
    AbortScene,
    Draw,
    /// Calls that need the device but do not move the state
    /// (framebuffer creation, shader reload)
    Maintenance(&'static str),
}

impl SceneOperation {
    /// Method name reported in protocol violations
    pub fn name(&self) -> &'static str {
        match self {
            SceneOperation::Init => "init",
            SceneOperation::BeginScene => "begin_scene",
            SceneOperation::Submit(name) => name,
            SceneOperation::EndScene => "end_scene",
            SceneOperation::AbortScene => "abort_scene",
            SceneOperation::Draw => "draw",
            SceneOperation::Maintenance(name) => name,
        }
    }
}

impl SceneState {
    /// State reached by applying `operation`, `None` when the call is illegal
    pub fn after(self, operation: SceneOperation) -> Option<SceneState> {
        use SceneState::*;
        match (self, operation) {
            (Uninitialized, SceneOperation::Init) => Some(Initialized),
            (Initialized | Idle, SceneOperation::BeginScene) => Some(BuildingScene),
            (BuildingScene, SceneOperation::Submit(_)) => Some(BuildingScene),
            (BuildingScene, SceneOperation::EndScene) => Some(Idle),
            // Nothing drawable until the next completed build
            (BuildingScene, SceneOperation::AbortScene) => Some(Initialized),
            (Idle, SceneOperation::Draw) => Some(Idle),
            (Uninitialized, SceneOperation::Maintenance(_)) => None,
            (state, SceneOperation::Maintenance(_)) => Some(state),
            _ => None,
        }
    }
}

/// Tracks the current SceneState of one renderer
#[derive(Debug)]
pub struct SceneSanitizer {
    state: SceneState,
}

impl SceneSanitizer {
    pub fn new() -> Self {
        Self { state: SceneState::Uninitialized }
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Validate `operation` without changing state
    ///
    /// Returns the state the operation would lead to.
    pub fn check(&self, operation: SceneOperation) -> Result<SceneState> {
        match self.state.after(operation) {
            Some(next) => Ok(next),
            None => {
                engine_error!("nova3d::SceneSanitizer",
                    "{} called while {:?}", operation.name(), self.state);
                Err(Error::ProtocolViolation {
                    operation: operation.name(),
                    state: self.state,
                })
            }
        }
    }

    /// Validate `operation` and move to the resulting state
    pub fn apply(&mut self, operation: SceneOperation) -> Result<()> {
        self.state = self.check(operation)?;
        Ok(())
    }
}

impl Default for SceneSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "sanitizer_tests.rs"]
mod tests;
