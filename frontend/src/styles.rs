pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-5xl rounded-xl shadow-lg";
pub const CONTAINER_SM: &str = "container mx-auto px-6 py-10 max-w-2xl rounded-xl shadow-lg";

pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";

pub const INPUT_BASE: &str = "appearance-none border border-gray-600 bg-gray-800 text-white text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-blue-500";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 focus:ring-2 focus:ring-blue-400 focus:outline-none";
pub const BUTTON_SECONDARY: &str = "bg-gray-600 hover:bg-gray-700 focus:ring-2 focus:ring-gray-400 focus:outline-none";
pub const BUTTON_FULL: &str = "w-full py-3 px-5 font-semibold rounded-lg transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed mt-8";

pub const TEXT_LABEL: &str = "block text-sm font-semibold text-gray-200";
pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";

pub const FLEX_BETWEEN: &str = "flex justify-between items-center";
pub const SPACE_Y_LG: &str = "space-y-6";

pub const KING_GRID: &str = "grid grid-cols-2 md:grid-cols-4 gap-4";
pub const KING_CARD: &str = "relative flex flex-col items-center justify-center aspect-[5/7] w-full max-w-[10rem] mx-auto bg-white rounded-xl border-2 border-gray-300 shadow-md p-3 transition-transform duration-200";
pub const KING_CARD_SELECTED: &str = "border-yellow-400 ring-4 ring-yellow-400 scale-105";
pub const CARD_CORNER_TL: &str = "absolute top-2 left-2 text-xs font-bold";
pub const CARD_CORNER_BR: &str = "absolute bottom-2 right-2 text-xs font-bold rotate-180";
pub const SUIT_RED: &str = "text-red-600";
pub const SUIT_BLACK: &str = "text-gray-900";
pub const VOTE_BAR: &str = "w-full h-2 mt-2 bg-gray-200 rounded-full overflow-hidden";
pub const VOTE_BAR_FILL: &str = "h-full bg-yellow-400 transition-all duration-500";

pub const BG_PAGE: &str = "bg-gray-900 min-h-screen";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary(full_width: bool) -> String {
    if full_width {
        combine_classes(BUTTON_BASE, &combine_classes(BUTTON_PRIMARY, BUTTON_FULL))
    } else {
        combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
    }
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white shadow-lg"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white shadow-lg"),
    }
}
