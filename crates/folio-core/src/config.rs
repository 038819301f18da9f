use crate::constants::*;

/// Tunables for one controller instance.
///
/// Every field defaults to the matching constant in [`crate::constants`]; the
/// browser layer builds the default and tests override single fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub navbar_hide_threshold_px: f64,
    pub section_activation_offset_px: f64,
    pub anchor_scroll_offset_px: f64,
    pub reveal_initial_offset_px: f64,
    pub reveal_fallback_ms: u64,
    pub counter_steps: f64,
    pub counter_interval_ms: u64,
    pub typing_start_delay_ms: u64,
    pub typing_char_interval_ms: u64,
    pub tilt_divisor: f64,
    pub tilt_perspective_px: f64,
    pub tilt_lift_px: f64,
    pub parallax_speed: f64,
    pub parallax_image_factor: f64,
    pub back_to_top_threshold_px: f64,
    pub back_to_top_lift_px: f64,
    pub gradient_interval_ms: u64,
    pub hero_fade_in_delay_ms: u64,
    pub skill_tag_stagger_ms: u64,
    pub footer_owner: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            navbar_hide_threshold_px: NAVBAR_HIDE_THRESHOLD_PX,
            section_activation_offset_px: SECTION_ACTIVATION_OFFSET_PX,
            anchor_scroll_offset_px: ANCHOR_SCROLL_OFFSET_PX,
            reveal_initial_offset_px: REVEAL_INITIAL_OFFSET_PX,
            reveal_fallback_ms: REVEAL_FALLBACK_MS,
            counter_steps: COUNTER_STEPS,
            counter_interval_ms: COUNTER_INTERVAL_MS,
            typing_start_delay_ms: TYPING_START_DELAY_MS,
            typing_char_interval_ms: TYPING_CHAR_INTERVAL_MS,
            tilt_divisor: TILT_DIVISOR,
            tilt_perspective_px: TILT_PERSPECTIVE_PX,
            tilt_lift_px: TILT_LIFT_PX,
            parallax_speed: PARALLAX_SPEED,
            parallax_image_factor: PARALLAX_IMAGE_FACTOR,
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
            back_to_top_lift_px: BACK_TO_TOP_LIFT_PX,
            gradient_interval_ms: GRADIENT_INTERVAL_MS,
            hero_fade_in_delay_ms: HERO_FADE_IN_DELAY_MS,
            skill_tag_stagger_ms: SKILL_TAG_STAGGER_MS,
            footer_owner: FOOTER_OWNER.to_string(),
        }
    }
}
