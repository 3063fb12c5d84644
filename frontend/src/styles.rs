pub const CONTAINER: &str = "w-full max-w-4xl mx-auto p-4 md:p-8 flex flex-col items-center space-y-8";
pub const HEADER: &str = "text-center";
pub const TEXT_H1: &str = "text-4xl md:text-5xl font-bold text-gray-800";
pub const TEXT_SUBTITLE: &str = "text-gray-600 mt-2 text-lg";
pub const TEXT_H3: &str = "text-lg font-semibold text-gray-700 mb-2";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-700 mb-1";
pub const FOOTER: &str = "mt-12 text-center text-gray-500 text-sm";

pub const LAYOUT: &str = "w-full md:flex md:space-x-8";
pub const CONTROLS_CARD: &str = "md:w-1/3 bg-white p-6 rounded-xl shadow-xl space-y-6 mb-8 md:mb-0";
pub const WHEEL_SECTION: &str = "md:w-2/3 flex flex-col items-center space-y-6";
pub const WHEEL_FRAME: &str = "relative w-80 h-80 md:w-96 md:h-96";
pub const WHEEL_SVG: &str = "w-full h-full drop-shadow-2xl";
pub const POINTER_WRAPPER: &str = "absolute top-0 left-1/2 -translate-x-1/2 -translate-y-2 transform";
pub const POINTER: &str = "w-0 h-0 border-l-[15px] border-l-transparent border-t-[25px] border-t-indigo-600 border-r-[15px] border-r-transparent shadow-lg";

pub const INPUT: &str = "flex-grow p-3 border border-gray-300 rounded-lg shadow-sm focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 transition duration-150";
pub const BUTTON_ADD: &str = "p-3 bg-indigo-600 text-white rounded-lg shadow-md hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2 disabled:opacity-50 transition duration-150 flex items-center justify-center";
pub const BUTTON_REMOVE: &str = "p-1 text-red-500 hover:text-red-700 opacity-50 group-hover:opacity-100 transition duration-150 disabled:opacity-25";
pub const BUTTON_SPIN: &str = "w-full md:w-auto px-12 py-4 bg-red-600 text-white text-xl font-semibold rounded-lg shadow-xl hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500 focus:ring-offset-2 disabled:opacity-50 transition-transform duration-150 transform active:scale-95 flex items-center justify-center space-x-2";
pub const BUTTON_PRIMARY: &str = "px-6 py-3 bg-indigo-600 text-white font-semibold rounded-lg shadow-md hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2 transition duration-150";

pub const ITEM_LIST: &str = "space-y-2 max-h-60 overflow-y-auto pr-2";
pub const ITEM_ROW: &str = "flex justify-between items-center p-3 bg-gray-100 rounded-lg shadow-sm group";
pub const ITEM_LABEL: &str = "text-gray-800 truncate";

pub const ALERT_WARNING: &str = "p-3 text-sm text-yellow-800 rounded-lg bg-yellow-50 flex justify-between items-center";

pub const POPUP_OVERLAY: &str = "fixed inset-0 bg-black bg-opacity-75 flex items-center justify-center z-50 p-4 transition-opacity duration-300";
pub const POPUP_CARD: &str = "bg-white p-8 rounded-xl shadow-2xl text-center max-w-md w-full transform transition-all duration-300 scale-100";
pub const POPUP_TITLE: &str = "text-3xl font-bold mb-4";
pub const POPUP_WINNER: &str = "text-5xl font-extrabold mb-6 p-4 rounded-lg break-words";
