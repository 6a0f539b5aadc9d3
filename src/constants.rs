pub const RENDER_WIDTH: i32 = 750;            // Default window width (pt)
pub const RENDER_HEIGHT: i32 = 1334;          // Default window height (pt)
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

// --- Item layout ---
pub const TOP_PADDING: f32 = 50.0;            // Minimum gap between bounds top and the stack
pub const BOTTOM_PADDING: f32 = 20.0;         // Minimum gap between the stack and bounds bottom
pub const SIDE_PADDING: f32 = 20.0;           // Horizontal inset of the stack
pub const STACK_SPACING: f32 = 20.0;          // Gap between image, title and description

// --- Label defaults ---
pub const TITLE_FONT_SIZE: f32 = 36.0;
pub const DESCRIPTION_FONT_SIZE: f32 = 14.0;
pub const LINE_SPACING: f32 = 1.2;            // Line height as a multiple of the font size

// --- Transitions ---
pub const SHOW_DURATION: f32 = 0.8;           // Incoming item fade/rise (seconds)
pub const HIDE_DURATION: f32 = 0.2;           // Outgoing item fade/rise (seconds)
pub const DY_OFFSET_ANIMATION: f32 = 110.0;   // Vertical travel of both animations (pt)
