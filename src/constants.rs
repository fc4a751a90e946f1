// DOM names the web frontend binds to

// Canvas the panorama is drawn into
pub const CANVAS_ID: &str = "canvas";

// Markup-declared hotspots
pub const HOTSPOT_SELECTOR: &str = "[data-pointer]";
pub const HOTSPOT_ATTR_X: &str = "data-x";
pub const HOTSPOT_ATTR_Y: &str = "data-y";
pub const HOTSPOT_ATTR_Z: &str = "data-z";

// Class toggled on a hotspot while it sits near the view centre
pub const NEAR_CENTER_CLASS: &str = "close";

// CSS display values written by the projector
pub const DISPLAY_VISIBLE: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";
