pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-6";
pub const LAYOUT: &str = "max-w-7xl mx-auto grid grid-cols-1 xl:grid-cols-4 gap-6";
pub const SIDE_PANEL: &str = "xl:col-span-1 space-y-4";
pub const MAIN_PANEL: &str = "xl:col-span-3 space-y-6";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const CARD_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const CARD_INFO: &str = "bg-blue-50 dark:bg-blue-900/50 border border-blue-200 dark:border-blue-800 rounded-lg p-4 text-blue-700 dark:text-blue-200";
pub const CARD_WARNING: &str = "bg-yellow-50 dark:bg-yellow-900/50 border border-yellow-200 dark:border-yellow-800 rounded-lg p-4 text-yellow-700 dark:text-yellow-200";
pub const BUTTON_SPIN: &str = "w-full inline-flex items-center justify-center px-4 py-3 rounded-lg font-bold text-white bg-gradient-to-r from-red-600 to-red-700 hover:from-red-700 hover:to-red-800 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "w-full inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_BALANCE: &str = "text-3xl font-bold text-green-500 dark:text-green-400";
pub const TEXT_COUNTDOWN: &str = "text-2xl font-bold text-yellow-500 dark:text-yellow-400";
pub const TEXT_STAKED: &str = "text-xl font-bold text-blue-600 dark:text-blue-400";
pub const TOAST_STACK: &str = "fixed top-4 right-4 z-50 space-y-2 w-72";

// Table felt
pub const TABLE: &str = "bg-green-800 rounded-lg shadow-lg p-4 select-none";
pub const TABLE_GRID: &str = "grid grid-cols-[3rem_repeat(12,minmax(0,1fr))_4rem] gap-1";
pub const CELL: &str = "relative h-12 flex items-center justify-center rounded font-bold text-white cursor-pointer transition-all duration-200 hover:brightness-125";
pub const CELL_RED: &str = "bg-red-600";
pub const CELL_BLACK: &str = "bg-gray-900";
pub const CELL_GREEN: &str = "bg-green-600";
pub const CELL_OUTSIDE: &str = "h-10 flex items-center justify-center rounded border border-white/40 text-white text-sm font-semibold cursor-pointer hover:bg-white/10";
pub const CELL_WINNER: &str = "ring-4 ring-yellow-400";
pub const CELL_DISABLED: &str = "opacity-60 cursor-not-allowed";
pub const HOTSPOT: &str = "absolute z-10 rounded-full hover:bg-yellow-300/60 cursor-pointer";
pub const CHIP_BADGE: &str = "absolute -top-2 -right-2 z-20 min-w-[1.5rem] h-6 px-1 rounded-full bg-yellow-400 text-gray-900 text-xs font-bold flex items-center justify-center shadow";
pub const CHIP: &str = "w-14 h-14 rounded-full border-4 border-dashed font-bold text-sm flex items-center justify-center transition-all duration-200";
pub const CHIP_SELECTED: &str = "scale-110 ring-4 ring-yellow-400";
pub const HISTORY_BALL: &str = "w-9 h-9 rounded-full flex items-center justify-center text-white text-sm font-bold";
