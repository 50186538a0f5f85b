//! Punch session exported to JavaScript
//!
//! MediaPipe runs in the browser and hands each frame's pose over as a flat
//! Float32Array. Each `PunchSession` owns one engine session, so a page can
//! run several workouts (or tests) side by side.

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::pose::parse_pose_buffer;
use crate::session::{FrameResult, Session};

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Build a session from an optional JSON config document
pub(crate) fn open_session(config_json: Option<&str>) -> Result<Session> {
    let config = match config_json {
        Some(json) if !json.trim().is_empty() => EngineConfig::from_json(json)?,
        _ => EngineConfig::default(),
    };
    Session::new(config)
}

/// Parse one pose buffer and run it through the session
pub(crate) fn process_buffer(session: &mut Session, data: &[f32], timestamp: f64) -> Result<FrameResult> {
    let mut landmarks = parse_pose_buffer(data)?;
    if timestamp.is_finite() {
        landmarks = landmarks.with_timestamp(timestamp);
    }
    Ok(session.process_frame(&landmarks))
}

#[wasm_bindgen]
pub struct PunchSession {
    session: Session,
}

#[wasm_bindgen]
impl PunchSession {
    /// `config_json` may be omitted to use the default thresholds
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> std::result::Result<PunchSession, JsValue> {
        let session = open_session(config_json.as_deref())?;
        Ok(Self { session })
    }

    /// Called from JS with a flat Float32Array of 99 (x, y, z) or
    /// 132 (x, y, z, visibility) values and the capture time in seconds.
    ///
    /// Returns the frame result as JSON, or `undefined` if the buffer was
    /// rejected.
    pub fn process_landmarks(&mut self, data: &[f32], timestamp: f64) -> Option<String> {
        match process_buffer(&mut self.session, data, timestamp) {
            Ok(result) => serde_json::to_string(&result).ok(),
            Err(err) => {
                warn!(%err, "dropping pose frame");
                None
            }
        }
    }

    pub fn total_count(&self) -> u32 {
        self.session.total_count()
    }

    pub fn left_count(&self) -> u32 {
        self.session.count(crate::pose::Side::Left)
    }

    pub fn right_count(&self) -> u32 {
        self.session.count(crate::pose::Side::Right)
    }

    /// Start a new workout on the same configuration
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Session summary as JSON, for the workout log
    pub fn summary_json(&self) -> Option<String> {
        serde_json::to_string(&self.session.summary()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, POSE_BUFFER_XYZV};

    /// 33 × (x, y, z, visibility) buffer with a level left arm
    fn pose_buffer(wrist: (f32, f32)) -> Vec<f32> {
        let mut data = vec![0.0; POSE_BUFFER_XYZV];
        let mut put = |index: usize, x: f32, y: f32| {
            data[index * 4] = x;
            data[index * 4 + 1] = y;
            data[index * 4 + 3] = 0.99;
        };
        put(LEFT_SHOULDER, 0.2, 0.4);
        put(LEFT_ELBOW, 0.4, 0.4);
        put(LEFT_WRIST, wrist.0, wrist.1);
        data
    }

    #[test]
    fn test_open_session_config() {
        assert!(open_session(None).is_ok());
        assert!(open_session(Some("  ")).is_ok());

        let session = open_session(Some(r#"{"arm": {"thresholds": {"extend_above": 150.0}}}"#)).unwrap();
        assert_eq!(session.config().arm.thresholds.extend_above, 150.0);

        assert!(matches!(
            open_session(Some(r#"{"form": {"drop_margin": -0.1}}"#)),
            Err(Error::InvalidDropMargin(_))
        ));
    }

    #[test]
    fn test_process_buffer_counts_punch() {
        let mut session = open_session(None).unwrap();
        // Bent: wrist folded back over the shoulder side
        process_buffer(&mut session, &pose_buffer((0.25, 0.35)), 0.0).unwrap();
        // Straight: wrist in line with the upper arm
        let result = process_buffer(&mut session, &pose_buffer((0.6, 0.4)), 0.033).unwrap();

        assert_eq!(result.total_count, 1);
        assert_eq!(session.summary().last_punch_at, Some(0.033));
    }

    #[test]
    fn test_process_buffer_ignores_nan_timestamp() {
        let mut session = open_session(None).unwrap();
        process_buffer(&mut session, &pose_buffer((0.6, 0.4)), f64::NAN).unwrap();
        assert_eq!(session.total_count(), 1);
        assert_eq!(session.summary().last_punch_at, None);
    }

    #[test]
    fn test_punch_session_round() {
        let mut js = PunchSession::new(None).unwrap();
        assert!(js.process_landmarks(&pose_buffer((0.6, 0.4)), 1.0).is_some());
        assert_eq!(js.total_count(), 1);
        assert_eq!(js.left_count(), 1);
        assert_eq!(js.right_count(), 0);

        // Wrong length is dropped without touching the session
        assert!(js.process_landmarks(&[0.0; 10], 2.0).is_none());
        assert_eq!(js.total_count(), 1);

        let summary: serde_json::Value = serde_json::from_str(&js.summary_json().unwrap()).unwrap();
        assert_eq!(summary["totalCount"], 1);
        assert_eq!(summary["framesProcessed"], 1);

        js.reset();
        assert_eq!(js.total_count(), 0);
    }
}
