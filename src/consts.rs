//! Class names, storage keys, and timing defaults shared across components.

// ── Classes ─────────────────────────────────────────────────────

/// Root class selecting the dark palette.
pub const DARK_CLASS: &str = "dark";

/// Hides an element outright.
pub const HIDDEN_CLASS: &str = "hidden";

/// Marks the selected dropdown, option, or accordion header.
pub const ACTIVE_CLASS: &str = "active";

/// Marks an expanded accordion header.
pub const OPEN_CLASS: &str = "open";

/// Dims the menu's open trigger while the overlay is shown.
pub const DIMMED_CLASS: &str = "opacity-0";

/// Present on the menu container while the overlay is open.
pub const MENU_OPEN_CLASS: &str = "is-open";

/// Present on the pricing switch while yearly billing is selected.
pub const YEARLY_CLASS: &str = "yearly";

/// Marks the selected team member tab.
pub const TAB_ACTIVE_CLASS: &str = "tab-active";

/// Present on the team detail panel while it swaps members.
pub const TRANSITIONING_CLASS: &str = "transitioning";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "color-theme";

/// Media query for the operating system's color-scheme signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Menu ────────────────────────────────────────────────────────

/// Viewport width (CSS px) at and above which dropdowns are single-select.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// Playback rate used when the menu closes.
pub const MENU_CLOSE_TIME_SCALE: f64 = 1.2;

/// Delay before the open trigger fades back in after a close.
pub const OPEN_TRIGGER_REVEAL_DELAY_MS: u32 = 500;

// ── Accordion ───────────────────────────────────────────────────

/// Bottom padding of an expanded accordion item, in CSS px.
pub const ACCORDION_OPEN_PADDING_PX: f64 = 40.0;

/// Bottom margin of an expanded compact accordion body, in CSS px.
pub const ACCORDION_OPEN_BODY_MARGIN_PX: f64 = 20.0;

/// Border drawn around an expanded bordered accordion item.
pub const ACCORDION_OPEN_BORDER: &str = "1px solid black";

// ── Counter ─────────────────────────────────────────────────────

/// Counters reach their target in this many increments.
pub const COUNTER_STEPS: u64 = 100;

/// Interval between counter increments.
pub const COUNTER_STEP_MS: u32 = 20;

/// Delay between successive counters fading in.
pub const COUNTER_STAGGER_MS: u32 = 200;

/// Fraction of the counter section that must be visible to start counting.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.17;

// ── Team ────────────────────────────────────────────────────────

/// Time the detail panel spends faded out before the new member is written.
pub const TEAM_SWAP_DELAY_MS: u32 = 300;

/// Time after the swap before another tab may be selected.
pub const TEAM_SETTLE_DELAY_MS: u32 = 400;

// ── Page ────────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` carrying config overrides.
pub const CONFIG_SCRIPT_ID: &str = "site-config";
