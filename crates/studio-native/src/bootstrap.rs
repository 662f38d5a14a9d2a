//! Phased startup of the native engine.
//!
//! Runs once, before any window is created. A failure in any phase is
//! fatal: the studio cannot operate without a fully initialized engine,
//! so there is no retry or partial-recovery path.

use tracing::{debug, info};

use crate::error::NativeError;
use crate::surface::NativeSurface;

/// Engine bootstrap phases, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    /// Initialize the engine API and load its modules.
    InitApi,

    /// Create the streaming and recording outputs.
    CreateOutputs,

    /// Create the video and audio encoders.
    CreateEncoders,

    /// Reset the audio and video contexts and associate them with the
    /// current streaming and recording contexts.
    ResetContexts,

    /// Create the service and wire encoders and service to the outputs.
    WireService,
}

impl BootPhase {
    /// Returns the next phase, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::InitApi => Some(Self::CreateOutputs),
            Self::CreateOutputs => Some(Self::CreateEncoders),
            Self::CreateEncoders => Some(Self::ResetContexts),
            Self::ResetContexts => Some(Self::WireService),
            Self::WireService => None,
        }
    }

    /// Returns the display name for this phase.
    pub fn name(self) -> &'static str {
        match self {
            Self::InitApi => "Initializing API",
            Self::CreateOutputs => "Creating outputs",
            Self::CreateEncoders => "Creating encoders",
            Self::ResetContexts => "Resetting contexts",
            Self::WireService => "Wiring service",
        }
    }

    /// Native calls issued during this phase, in order.
    fn calls(self) -> &'static [&'static str] {
        match self {
            Self::InitApi => &["API_init", "API_openAllModules", "API_initAllModules"],
            Self::CreateOutputs => &[
                "Service_createStreamingOutput",
                "Service_createRecordingOutput",
            ],
            Self::CreateEncoders => &[
                "Service_createVideoStreamingEncoder",
                "Service_createVideoRecordingEncoder",
                "Service_createAudioEncoder",
            ],
            Self::ResetContexts => &[
                "Service_resetAudioContext",
                "Service_resetVideoContext",
                "Service_associateAudioAndVideoToTheCurrentStreamingContext",
                "Service_associateAudioAndVideoToTheCurrentRecordingContext",
            ],
            Self::WireService => &[
                "Service_createService",
                "Service_associateAudioAndVideoEncodersToTheCurrentStreamingOutput",
                "Service_associateAudioAndVideoEncodersToTheCurrentRecordingOutput",
                "Service_setServiceToTheStreamingOutput",
            ],
        }
    }
}

/// Initialize the engine through every phase, failing fast on the
/// first error.
pub fn bootstrap(surface: &dyn NativeSurface) -> Result<(), NativeError> {
    let mut phase = BootPhase::InitApi;

    loop {
        debug!(phase = phase.name(), "bootstrap phase");

        for method in phase.calls() {
            surface.call(method, &[])?;
        }

        match phase.next() {
            Some(next) => phase = next,
            None => break,
        }
    }

    info!("native engine initialized");
    Ok(())
}
