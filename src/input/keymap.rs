//! Key Code Mapping Tables
//!
//! Host key code to Linux evdev keycode mapping. The two numbering schemes are
//! unrelated, so the table is spelled out entry by entry. Codes outside the
//! table map to [`UNKNOWN_KEY`].

use std::collections::HashMap;

/// Sentinel returned for host codes with no device mapping (`KEY_RESERVED`)
pub const UNKNOWN_KEY: u32 = 0;

/// Linux evdev keycodes
pub mod keycodes {
    pub const KEY_ESC: u32 = 1;
    pub const KEY_1: u32 = 2;
    pub const KEY_2: u32 = 3;
    pub const KEY_3: u32 = 4;
    pub const KEY_4: u32 = 5;
    pub const KEY_5: u32 = 6;
    pub const KEY_6: u32 = 7;
    pub const KEY_7: u32 = 8;
    pub const KEY_8: u32 = 9;
    pub const KEY_9: u32 = 10;
    pub const KEY_0: u32 = 11;
    pub const KEY_MINUS: u32 = 12;
    pub const KEY_EQUAL: u32 = 13;
    pub const KEY_BACKSPACE: u32 = 14;
    pub const KEY_TAB: u32 = 15;
    pub const KEY_Q: u32 = 16;
    pub const KEY_W: u32 = 17;
    pub const KEY_E: u32 = 18;
    pub const KEY_R: u32 = 19;
    pub const KEY_T: u32 = 20;
    pub const KEY_Y: u32 = 21;
    pub const KEY_U: u32 = 22;
    pub const KEY_I: u32 = 23;
    pub const KEY_O: u32 = 24;
    pub const KEY_P: u32 = 25;
    pub const KEY_LEFTBRACE: u32 = 26;
    pub const KEY_RIGHTBRACE: u32 = 27;
    pub const KEY_ENTER: u32 = 28;
    pub const KEY_LEFTCTRL: u32 = 29;
    pub const KEY_A: u32 = 30;
    pub const KEY_S: u32 = 31;
    pub const KEY_D: u32 = 32;
    pub const KEY_F: u32 = 33;
    pub const KEY_G: u32 = 34;
    pub const KEY_H: u32 = 35;
    pub const KEY_J: u32 = 36;
    pub const KEY_K: u32 = 37;
    pub const KEY_L: u32 = 38;
    pub const KEY_SEMICOLON: u32 = 39;
    pub const KEY_APOSTROPHE: u32 = 40;
    pub const KEY_GRAVE: u32 = 41;
    pub const KEY_LEFTSHIFT: u32 = 42;
    pub const KEY_BACKSLASH: u32 = 43;
    pub const KEY_Z: u32 = 44;
    pub const KEY_X: u32 = 45;
    pub const KEY_C: u32 = 46;
    pub const KEY_V: u32 = 47;
    pub const KEY_B: u32 = 48;
    pub const KEY_N: u32 = 49;
    pub const KEY_M: u32 = 50;
    pub const KEY_COMMA: u32 = 51;
    pub const KEY_DOT: u32 = 52;
    pub const KEY_SLASH: u32 = 53;
    pub const KEY_RIGHTSHIFT: u32 = 54;
    pub const KEY_KPASTERISK: u32 = 55;
    pub const KEY_LEFTALT: u32 = 56;
    pub const KEY_SPACE: u32 = 57;
    pub const KEY_CAPSLOCK: u32 = 58;

    // Function keys
    pub const KEY_F1: u32 = 59;
    pub const KEY_F2: u32 = 60;
    pub const KEY_F3: u32 = 61;
    pub const KEY_F4: u32 = 62;
    pub const KEY_F5: u32 = 63;
    pub const KEY_F6: u32 = 64;
    pub const KEY_F7: u32 = 65;
    pub const KEY_F8: u32 = 66;
    pub const KEY_F9: u32 = 67;
    pub const KEY_F10: u32 = 68;
    pub const KEY_NUMLOCK: u32 = 69;
    pub const KEY_SCROLLLOCK: u32 = 70;

    // Numpad
    pub const KEY_KP7: u32 = 71;
    pub const KEY_KP8: u32 = 72;
    pub const KEY_KP9: u32 = 73;
    pub const KEY_KPMINUS: u32 = 74;
    pub const KEY_KP4: u32 = 75;
    pub const KEY_KP5: u32 = 76;
    pub const KEY_KP6: u32 = 77;
    pub const KEY_KPPLUS: u32 = 78;
    pub const KEY_KP1: u32 = 79;
    pub const KEY_KP2: u32 = 80;
    pub const KEY_KP3: u32 = 81;
    pub const KEY_KP0: u32 = 82;
    pub const KEY_KPDOT: u32 = 83;

    pub const KEY_ZENKAKUHANKAKU: u32 = 85;
    pub const KEY_F11: u32 = 87;
    pub const KEY_F12: u32 = 88;
    pub const KEY_RO: u32 = 89;
    pub const KEY_HENKAN: u32 = 92;
    pub const KEY_KATAKANAHIRAGANA: u32 = 93;
    pub const KEY_MUHENKAN: u32 = 94;
    pub const KEY_KPENTER: u32 = 96;
    pub const KEY_RIGHTCTRL: u32 = 97;
    pub const KEY_KPSLASH: u32 = 98;
    pub const KEY_SYSRQ: u32 = 99;
    pub const KEY_RIGHTALT: u32 = 100;
    pub const KEY_HOME: u32 = 102;
    pub const KEY_UP: u32 = 103;
    pub const KEY_PAGEUP: u32 = 104;
    pub const KEY_LEFT: u32 = 105;
    pub const KEY_RIGHT: u32 = 106;
    pub const KEY_END: u32 = 107;
    pub const KEY_DOWN: u32 = 108;
    pub const KEY_PAGEDOWN: u32 = 109;
    pub const KEY_INSERT: u32 = 110;
    pub const KEY_DELETE: u32 = 111;
    pub const KEY_MUTE: u32 = 113;
    pub const KEY_VOLUMEDOWN: u32 = 114;
    pub const KEY_VOLUMEUP: u32 = 115;
    pub const KEY_POWER: u32 = 116;
    pub const KEY_KPEQUAL: u32 = 117;
    pub const KEY_PAUSE: u32 = 119;
    pub const KEY_KPCOMMA: u32 = 121;
    pub const KEY_YEN: u32 = 124;
    pub const KEY_LEFTMETA: u32 = 125;
    pub const KEY_RIGHTMETA: u32 = 126;
    pub const KEY_COPY: u32 = 133;
    pub const KEY_PASTE: u32 = 135;
    pub const KEY_CUT: u32 = 137;
    pub const KEY_HELP: u32 = 138;
    pub const KEY_MENU: u32 = 139;
    pub const KEY_CALC: u32 = 140;
    pub const KEY_SETUP: u32 = 141;
    pub const KEY_SLEEP: u32 = 142;
    pub const KEY_WAKEUP: u32 = 143;
    pub const KEY_WWW: u32 = 150;
    pub const KEY_MAIL: u32 = 155;
    pub const KEY_BOOKMARKS: u32 = 156;
    pub const KEY_BACK: u32 = 158;
    pub const KEY_FORWARD: u32 = 159;
    pub const KEY_CLOSECD: u32 = 160;
    pub const KEY_EJECTCD: u32 = 161;
    pub const KEY_NEXTSONG: u32 = 163;
    pub const KEY_PLAYPAUSE: u32 = 164;
    pub const KEY_PREVIOUSSONG: u32 = 165;
    pub const KEY_STOPCD: u32 = 166;
    pub const KEY_RECORD: u32 = 167;
    pub const KEY_REWIND: u32 = 168;
    pub const KEY_PHONE: u32 = 169;
    pub const KEY_HOMEPAGE: u32 = 172;
    pub const KEY_REFRESH: u32 = 173;
    pub const KEY_KPLEFTPAREN: u32 = 179;
    pub const KEY_KPRIGHTPAREN: u32 = 180;
    pub const KEY_PLAYCD: u32 = 200;
    pub const KEY_PAUSECD: u32 = 201;
    pub const KEY_FASTFORWARD: u32 = 208;
    pub const KEY_CAMERA: u32 = 212;
    pub const KEY_SEARCH: u32 = 217;
    pub const KEY_BRIGHTNESSDOWN: u32 = 224;
    pub const KEY_BRIGHTNESSUP: u32 = 225;
    pub const KEY_MICMUTE: u32 = 248;
    pub const KEY_SELECT: u32 = 353;
    pub const KEY_LANGUAGE: u32 = 368;
    pub const KEY_AUDIO: u32 = 392;
    pub const KEY_CALENDAR: u32 = 397;
    pub const KEY_ZOOMIN: u32 = 418;
    pub const KEY_ZOOMOUT: u32 = 419;
    pub const KEY_ADDRESSBOOK: u32 = 429;
    pub const KEY_FN: u32 = 464;
    pub const KEY_NUMERIC_STAR: u32 = 522;
    pub const KEY_NUMERIC_POUND: u32 = 523;
    pub const KEY_APPSELECT: u32 = 580;
}

/// Host key codes
pub mod host {
    pub const KEYCODE_HOME: i32 = 3;
    pub const KEYCODE_BACK: i32 = 4;
    pub const KEYCODE_CALL: i32 = 5;
    pub const KEYCODE_0: i32 = 7;
    pub const KEYCODE_1: i32 = 8;
    pub const KEYCODE_2: i32 = 9;
    pub const KEYCODE_3: i32 = 10;
    pub const KEYCODE_4: i32 = 11;
    pub const KEYCODE_5: i32 = 12;
    pub const KEYCODE_6: i32 = 13;
    pub const KEYCODE_7: i32 = 14;
    pub const KEYCODE_8: i32 = 15;
    pub const KEYCODE_9: i32 = 16;
    pub const KEYCODE_STAR: i32 = 17;
    pub const KEYCODE_POUND: i32 = 18;
    pub const KEYCODE_DPAD_UP: i32 = 19;
    pub const KEYCODE_DPAD_DOWN: i32 = 20;
    pub const KEYCODE_DPAD_LEFT: i32 = 21;
    pub const KEYCODE_DPAD_RIGHT: i32 = 22;
    pub const KEYCODE_DPAD_CENTER: i32 = 23;
    pub const KEYCODE_VOLUME_UP: i32 = 24;
    pub const KEYCODE_VOLUME_DOWN: i32 = 25;
    pub const KEYCODE_POWER: i32 = 26;
    pub const KEYCODE_CAMERA: i32 = 27;
    pub const KEYCODE_A: i32 = 29;
    pub const KEYCODE_B: i32 = 30;
    pub const KEYCODE_C: i32 = 31;
    pub const KEYCODE_D: i32 = 32;
    pub const KEYCODE_E: i32 = 33;
    pub const KEYCODE_F: i32 = 34;
    pub const KEYCODE_G: i32 = 35;
    pub const KEYCODE_H: i32 = 36;
    pub const KEYCODE_I: i32 = 37;
    pub const KEYCODE_J: i32 = 38;
    pub const KEYCODE_K: i32 = 39;
    pub const KEYCODE_L: i32 = 40;
    pub const KEYCODE_M: i32 = 41;
    pub const KEYCODE_N: i32 = 42;
    pub const KEYCODE_O: i32 = 43;
    pub const KEYCODE_P: i32 = 44;
    pub const KEYCODE_Q: i32 = 45;
    pub const KEYCODE_R: i32 = 46;
    pub const KEYCODE_S: i32 = 47;
    pub const KEYCODE_T: i32 = 48;
    pub const KEYCODE_U: i32 = 49;
    pub const KEYCODE_V: i32 = 50;
    pub const KEYCODE_W: i32 = 51;
    pub const KEYCODE_X: i32 = 52;
    pub const KEYCODE_Y: i32 = 53;
    pub const KEYCODE_Z: i32 = 54;
    pub const KEYCODE_COMMA: i32 = 55;
    pub const KEYCODE_PERIOD: i32 = 56;
    pub const KEYCODE_ALT_LEFT: i32 = 57;
    pub const KEYCODE_ALT_RIGHT: i32 = 58;
    pub const KEYCODE_SHIFT_LEFT: i32 = 59;
    pub const KEYCODE_SHIFT_RIGHT: i32 = 60;
    pub const KEYCODE_TAB: i32 = 61;
    pub const KEYCODE_SPACE: i32 = 62;
    pub const KEYCODE_EXPLORER: i32 = 64;
    pub const KEYCODE_ENVELOPE: i32 = 65;
    pub const KEYCODE_ENTER: i32 = 66;
    pub const KEYCODE_DEL: i32 = 67;
    pub const KEYCODE_GRAVE: i32 = 68;
    pub const KEYCODE_MINUS: i32 = 69;
    pub const KEYCODE_EQUALS: i32 = 70;
    pub const KEYCODE_LEFT_BRACKET: i32 = 71;
    pub const KEYCODE_RIGHT_BRACKET: i32 = 72;
    pub const KEYCODE_BACKSLASH: i32 = 73;
    pub const KEYCODE_SEMICOLON: i32 = 74;
    pub const KEYCODE_APOSTROPHE: i32 = 75;
    pub const KEYCODE_SLASH: i32 = 76;
    pub const KEYCODE_MENU: i32 = 82;
    pub const KEYCODE_SEARCH: i32 = 84;
    pub const KEYCODE_MEDIA_PLAY_PAUSE: i32 = 85;
    pub const KEYCODE_MEDIA_STOP: i32 = 86;
    pub const KEYCODE_MEDIA_NEXT: i32 = 87;
    pub const KEYCODE_MEDIA_PREVIOUS: i32 = 88;
    pub const KEYCODE_MEDIA_REWIND: i32 = 89;
    pub const KEYCODE_MEDIA_FAST_FORWARD: i32 = 90;
    pub const KEYCODE_MUTE: i32 = 91;
    pub const KEYCODE_PAGE_UP: i32 = 92;
    pub const KEYCODE_PAGE_DOWN: i32 = 93;
    pub const KEYCODE_ESCAPE: i32 = 111;
    pub const KEYCODE_FORWARD_DEL: i32 = 112;
    pub const KEYCODE_CTRL_LEFT: i32 = 113;
    pub const KEYCODE_CTRL_RIGHT: i32 = 114;
    pub const KEYCODE_CAPS_LOCK: i32 = 115;
    pub const KEYCODE_SCROLL_LOCK: i32 = 116;
    pub const KEYCODE_META_LEFT: i32 = 117;
    pub const KEYCODE_META_RIGHT: i32 = 118;
    pub const KEYCODE_FUNCTION: i32 = 119;
    pub const KEYCODE_SYSRQ: i32 = 120;
    pub const KEYCODE_BREAK: i32 = 121;
    pub const KEYCODE_MOVE_HOME: i32 = 122;
    pub const KEYCODE_MOVE_END: i32 = 123;
    pub const KEYCODE_INSERT: i32 = 124;
    pub const KEYCODE_FORWARD: i32 = 125;
    pub const KEYCODE_MEDIA_PLAY: i32 = 126;
    pub const KEYCODE_MEDIA_PAUSE: i32 = 127;
    pub const KEYCODE_MEDIA_CLOSE: i32 = 128;
    pub const KEYCODE_MEDIA_EJECT: i32 = 129;
    pub const KEYCODE_MEDIA_RECORD: i32 = 130;
    pub const KEYCODE_F1: i32 = 131;
    pub const KEYCODE_F2: i32 = 132;
    pub const KEYCODE_F3: i32 = 133;
    pub const KEYCODE_F4: i32 = 134;
    pub const KEYCODE_F5: i32 = 135;
    pub const KEYCODE_F6: i32 = 136;
    pub const KEYCODE_F7: i32 = 137;
    pub const KEYCODE_F8: i32 = 138;
    pub const KEYCODE_F9: i32 = 139;
    pub const KEYCODE_F10: i32 = 140;
    pub const KEYCODE_F11: i32 = 141;
    pub const KEYCODE_F12: i32 = 142;
    pub const KEYCODE_NUM_LOCK: i32 = 143;
    pub const KEYCODE_NUMPAD_0: i32 = 144;
    pub const KEYCODE_NUMPAD_1: i32 = 145;
    pub const KEYCODE_NUMPAD_2: i32 = 146;
    pub const KEYCODE_NUMPAD_3: i32 = 147;
    pub const KEYCODE_NUMPAD_4: i32 = 148;
    pub const KEYCODE_NUMPAD_5: i32 = 149;
    pub const KEYCODE_NUMPAD_6: i32 = 150;
    pub const KEYCODE_NUMPAD_7: i32 = 151;
    pub const KEYCODE_NUMPAD_8: i32 = 152;
    pub const KEYCODE_NUMPAD_9: i32 = 153;
    pub const KEYCODE_NUMPAD_DIVIDE: i32 = 154;
    pub const KEYCODE_NUMPAD_MULTIPLY: i32 = 155;
    pub const KEYCODE_NUMPAD_SUBTRACT: i32 = 156;
    pub const KEYCODE_NUMPAD_ADD: i32 = 157;
    pub const KEYCODE_NUMPAD_DOT: i32 = 158;
    pub const KEYCODE_NUMPAD_COMMA: i32 = 159;
    pub const KEYCODE_NUMPAD_ENTER: i32 = 160;
    pub const KEYCODE_NUMPAD_EQUALS: i32 = 161;
    pub const KEYCODE_NUMPAD_LEFT_PAREN: i32 = 162;
    pub const KEYCODE_NUMPAD_RIGHT_PAREN: i32 = 163;
    pub const KEYCODE_VOLUME_MUTE: i32 = 164;
    pub const KEYCODE_ZOOM_IN: i32 = 168;
    pub const KEYCODE_ZOOM_OUT: i32 = 169;
    pub const KEYCODE_BOOKMARK: i32 = 174;
    pub const KEYCODE_SETTINGS: i32 = 176;
    pub const KEYCODE_APP_SWITCH: i32 = 187;
    pub const KEYCODE_LANGUAGE_SWITCH: i32 = 204;
    pub const KEYCODE_CONTACTS: i32 = 207;
    pub const KEYCODE_CALENDAR: i32 = 208;
    pub const KEYCODE_MUSIC: i32 = 209;
    pub const KEYCODE_CALCULATOR: i32 = 210;
    pub const KEYCODE_ZENKAKU_HANKAKU: i32 = 211;
    pub const KEYCODE_MUHENKAN: i32 = 213;
    pub const KEYCODE_HENKAN: i32 = 214;
    pub const KEYCODE_KATAKANA_HIRAGANA: i32 = 215;
    pub const KEYCODE_YEN: i32 = 216;
    pub const KEYCODE_RO: i32 = 217;
    pub const KEYCODE_BRIGHTNESS_DOWN: i32 = 220;
    pub const KEYCODE_BRIGHTNESS_UP: i32 = 221;
    pub const KEYCODE_SLEEP: i32 = 223;
    pub const KEYCODE_WAKEUP: i32 = 224;
    pub const KEYCODE_HELP: i32 = 259;
    pub const KEYCODE_CUT: i32 = 277;
    pub const KEYCODE_COPY: i32 = 278;
    pub const KEYCODE_PASTE: i32 = 279;
    pub const KEYCODE_REFRESH: i32 = 285;
}

use host as h;
use keycodes as k;

/// Maps host key codes to evdev keycodes
pub struct KeyCodeMapper {
    table: HashMap<i32, u32>,
}

impl KeyCodeMapper {
    /// Create a new mapper with the full table loaded
    pub fn new() -> Self {
        let mut mapper = Self {
            table: HashMap::new(),
        };
        mapper.initialize_alphanumeric();
        mapper.initialize_modifiers_and_editing();
        mapper.initialize_navigation();
        mapper.initialize_function_keys();
        mapper.initialize_numpad();
        mapper.initialize_system_and_media();
        mapper.initialize_ime();
        mapper
    }

    fn insert_all(&mut self, mappings: &[(i32, u32)]) {
        for &(host_code, keycode) in mappings {
            self.table.insert(host_code, keycode);
        }
    }

    fn initialize_alphanumeric(&mut self) {
        self.insert_all(&[
            (h::KEYCODE_0, k::KEY_0),
            (h::KEYCODE_1, k::KEY_1),
            (h::KEYCODE_2, k::KEY_2),
            (h::KEYCODE_3, k::KEY_3),
            (h::KEYCODE_4, k::KEY_4),
            (h::KEYCODE_5, k::KEY_5),
            (h::KEYCODE_6, k::KEY_6),
            (h::KEYCODE_7, k::KEY_7),
            (h::KEYCODE_8, k::KEY_8),
            (h::KEYCODE_9, k::KEY_9),
            (h::KEYCODE_A, k::KEY_A),
            (h::KEYCODE_B, k::KEY_B),
            (h::KEYCODE_C, k::KEY_C),
            (h::KEYCODE_D, k::KEY_D),
            (h::KEYCODE_E, k::KEY_E),
            (h::KEYCODE_F, k::KEY_F),
            (h::KEYCODE_G, k::KEY_G),
            (h::KEYCODE_H, k::KEY_H),
            (h::KEYCODE_I, k::KEY_I),
            (h::KEYCODE_J, k::KEY_J),
            (h::KEYCODE_K, k::KEY_K),
            (h::KEYCODE_L, k::KEY_L),
            (h::KEYCODE_M, k::KEY_M),
            (h::KEYCODE_N, k::KEY_N),
            (h::KEYCODE_O, k::KEY_O),
            (h::KEYCODE_P, k::KEY_P),
            (h::KEYCODE_Q, k::KEY_Q),
            (h::KEYCODE_R, k::KEY_R),
            (h::KEYCODE_S, k::KEY_S),
            (h::KEYCODE_T, k::KEY_T),
            (h::KEYCODE_U, k::KEY_U),
            (h::KEYCODE_V, k::KEY_V),
            (h::KEYCODE_W, k::KEY_W),
            (h::KEYCODE_X, k::KEY_X),
            (h::KEYCODE_Y, k::KEY_Y),
            (h::KEYCODE_Z, k::KEY_Z),
            (h::KEYCODE_COMMA, k::KEY_COMMA),
            (h::KEYCODE_PERIOD, k::KEY_DOT),
            (h::KEYCODE_GRAVE, k::KEY_GRAVE),
            (h::KEYCODE_MINUS, k::KEY_MINUS),
            (h::KEYCODE_EQUALS, k::KEY_EQUAL),
            (h::KEYCODE_LEFT_BRACKET, k::KEY_LEFTBRACE),
            (h::KEYCODE_RIGHT_BRACKET, k::KEY_RIGHTBRACE),
            (h::KEYCODE_BACKSLASH, k::KEY_BACKSLASH),
            (h::KEYCODE_SEMICOLON, k::KEY_SEMICOLON),
            (h::KEYCODE_APOSTROPHE, k::KEY_APOSTROPHE),
            (h::KEYCODE_SLASH, k::KEY_SLASH),
            (h::KEYCODE_SPACE, k::KEY_SPACE),
        ]);
    }

    fn initialize_modifiers_and_editing(&mut self) {
        self.insert_all(&[
            (h::KEYCODE_ALT_LEFT, k::KEY_LEFTALT),
            (h::KEYCODE_ALT_RIGHT, k::KEY_RIGHTALT),
            (h::KEYCODE_SHIFT_LEFT, k::KEY_LEFTSHIFT),
            (h::KEYCODE_SHIFT_RIGHT, k::KEY_RIGHTSHIFT),
            (h::KEYCODE_CTRL_LEFT, k::KEY_LEFTCTRL),
            (h::KEYCODE_CTRL_RIGHT, k::KEY_RIGHTCTRL),
            (h::KEYCODE_META_LEFT, k::KEY_LEFTMETA),
            (h::KEYCODE_META_RIGHT, k::KEY_RIGHTMETA),
            (h::KEYCODE_FUNCTION, k::KEY_FN),
            (h::KEYCODE_CAPS_LOCK, k::KEY_CAPSLOCK),
            (h::KEYCODE_SCROLL_LOCK, k::KEY_SCROLLLOCK),
            (h::KEYCODE_TAB, k::KEY_TAB),
            (h::KEYCODE_ENTER, k::KEY_ENTER),
            (h::KEYCODE_DEL, k::KEY_BACKSPACE),
            (h::KEYCODE_FORWARD_DEL, k::KEY_DELETE),
            (h::KEYCODE_INSERT, k::KEY_INSERT),
            (h::KEYCODE_ESCAPE, k::KEY_ESC),
            (h::KEYCODE_SYSRQ, k::KEY_SYSRQ),
            (h::KEYCODE_BREAK, k::KEY_PAUSE),
            (h::KEYCODE_CUT, k::KEY_CUT),
            (h::KEYCODE_COPY, k::KEY_COPY),
            (h::KEYCODE_PASTE, k::KEY_PASTE),
        ]);
    }

    fn initialize_navigation(&mut self) {
        self.insert_all(&[
            (h::KEYCODE_DPAD_UP, k::KEY_UP),
            (h::KEYCODE_DPAD_DOWN, k::KEY_DOWN),
            (h::KEYCODE_DPAD_LEFT, k::KEY_LEFT),
            (h::KEYCODE_DPAD_RIGHT, k::KEY_RIGHT),
            (h::KEYCODE_DPAD_CENTER, k::KEY_SELECT),
            (h::KEYCODE_MOVE_HOME, k::KEY_HOME),
            (h::KEYCODE_MOVE_END, k::KEY_END),
            (h::KEYCODE_PAGE_UP, k::KEY_PAGEUP),
            (h::KEYCODE_PAGE_DOWN, k::KEY_PAGEDOWN),
        ]);
    }

    fn initialize_function_keys(&mut self) {
        self.insert_all(&[
            (h::KEYCODE_F1, k::KEY_F1),
            (h::KEYCODE_F2, k::KEY_F2),
            (h::KEYCODE_F3, k::KEY_F3),
            (h::KEYCODE_F4, k::KEY_F4),
            (h::KEYCODE_F5, k::KEY_F5),
            (h::KEYCODE_F6, k::KEY_F6),
            (h::KEYCODE_F7, k::KEY_F7),
            (h::KEYCODE_F8, k::KEY_F8),
            (h::KEYCODE_F9, k::KEY_F9),
            (h::KEYCODE_F10, k::KEY_F10),
            (h::KEYCODE_F11, k::KEY_F11),
            (h::KEYCODE_F12, k::KEY_F12),
        ]);
    }

    fn initialize_numpad(&mut self) {
        self.insert_all(&[
            (h::KEYCODE_NUM_LOCK, k::KEY_NUMLOCK),
            (h::KEYCODE_NUMPAD_0, k::KEY_KP0),
            (h::KEYCODE_NUMPAD_1, k::KEY_KP1),
            (h::KEYCODE_NUMPAD_2, k::KEY_KP2),
            (h::KEYCODE_NUMPAD_3, k::KEY_KP3),
            (h::KEYCODE_NUMPAD_4, k::KEY_KP4),
            (h::KEYCODE_NUMPAD_5, k::KEY_KP5),
            (h::KEYCODE_NUMPAD_6, k::KEY_KP6),
            (h::KEYCODE_NUMPAD_7, k::KEY_KP7),
            (h::KEYCODE_NUMPAD_8, k::KEY_KP8),
            (h::KEYCODE_NUMPAD_9, k::KEY_KP9),
            (h::KEYCODE_NUMPAD_DIVIDE, k::KEY_KPSLASH),
            (h::KEYCODE_NUMPAD_MULTIPLY, k::KEY_KPASTERISK),
            (h::KEYCODE_NUMPAD_SUBTRACT, k::KEY_KPMINUS),
            (h::KEYCODE_NUMPAD_ADD, k::KEY_KPPLUS),
            (h::KEYCODE_NUMPAD_DOT, k::KEY_KPDOT),
            (h::KEYCODE_NUMPAD_COMMA, k::KEY_KPCOMMA),
            (h::KEYCODE_NUMPAD_ENTER, k::KEY_KPENTER),
            (h::KEYCODE_NUMPAD_EQUALS, k::KEY_KPEQUAL),
            (h::KEYCODE_NUMPAD_LEFT_PAREN, k::KEY_KPLEFTPAREN),
            (h::KEYCODE_NUMPAD_RIGHT_PAREN, k::KEY_KPRIGHTPAREN),
            (h::KEYCODE_STAR, k::KEY_NUMERIC_STAR),
            (h::KEYCODE_POUND, k::KEY_NUMERIC_POUND),
        ]);
    }

    fn initialize_system_and_media(&mut self) {
        self.insert_all(&[
            (h::KEYCODE_HOME, k::KEY_HOMEPAGE),
            (h::KEYCODE_BACK, k::KEY_BACK),
            (h::KEYCODE_FORWARD, k::KEY_FORWARD),
            (h::KEYCODE_CALL, k::KEY_PHONE),
            (h::KEYCODE_MENU, k::KEY_MENU),
            (h::KEYCODE_SEARCH, k::KEY_SEARCH),
            (h::KEYCODE_APP_SWITCH, k::KEY_APPSELECT),
            (h::KEYCODE_SETTINGS, k::KEY_SETUP),
            (h::KEYCODE_HELP, k::KEY_HELP),
            (h::KEYCODE_REFRESH, k::KEY_REFRESH),
            (h::KEYCODE_BOOKMARK, k::KEY_BOOKMARKS),
            (h::KEYCODE_EXPLORER, k::KEY_WWW),
            (h::KEYCODE_ENVELOPE, k::KEY_MAIL),
            (h::KEYCODE_CONTACTS, k::KEY_ADDRESSBOOK),
            (h::KEYCODE_CALENDAR, k::KEY_CALENDAR),
            (h::KEYCODE_MUSIC, k::KEY_AUDIO),
            (h::KEYCODE_CALCULATOR, k::KEY_CALC),
            (h::KEYCODE_CAMERA, k::KEY_CAMERA),
            (h::KEYCODE_ZOOM_IN, k::KEY_ZOOMIN),
            (h::KEYCODE_ZOOM_OUT, k::KEY_ZOOMOUT),
            (h::KEYCODE_POWER, k::KEY_POWER),
            (h::KEYCODE_SLEEP, k::KEY_SLEEP),
            (h::KEYCODE_WAKEUP, k::KEY_WAKEUP),
            (h::KEYCODE_BRIGHTNESS_DOWN, k::KEY_BRIGHTNESSDOWN),
            (h::KEYCODE_BRIGHTNESS_UP, k::KEY_BRIGHTNESSUP),
            (h::KEYCODE_VOLUME_UP, k::KEY_VOLUMEUP),
            (h::KEYCODE_VOLUME_DOWN, k::KEY_VOLUMEDOWN),
            (h::KEYCODE_VOLUME_MUTE, k::KEY_MUTE),
            (h::KEYCODE_MUTE, k::KEY_MICMUTE),
            (h::KEYCODE_MEDIA_PLAY_PAUSE, k::KEY_PLAYPAUSE),
            (h::KEYCODE_MEDIA_PLAY, k::KEY_PLAYCD),
            (h::KEYCODE_MEDIA_PAUSE, k::KEY_PAUSECD),
            (h::KEYCODE_MEDIA_STOP, k::KEY_STOPCD),
            (h::KEYCODE_MEDIA_NEXT, k::KEY_NEXTSONG),
            (h::KEYCODE_MEDIA_PREVIOUS, k::KEY_PREVIOUSSONG),
            (h::KEYCODE_MEDIA_REWIND, k::KEY_REWIND),
            (h::KEYCODE_MEDIA_FAST_FORWARD, k::KEY_FASTFORWARD),
            (h::KEYCODE_MEDIA_CLOSE, k::KEY_CLOSECD),
            (h::KEYCODE_MEDIA_EJECT, k::KEY_EJECTCD),
            (h::KEYCODE_MEDIA_RECORD, k::KEY_RECORD),
        ]);
    }

    fn initialize_ime(&mut self) {
        self.insert_all(&[
            (h::KEYCODE_LANGUAGE_SWITCH, k::KEY_LANGUAGE),
            (h::KEYCODE_ZENKAKU_HANKAKU, k::KEY_ZENKAKUHANKAKU),
            (h::KEYCODE_MUHENKAN, k::KEY_MUHENKAN),
            (h::KEYCODE_HENKAN, k::KEY_HENKAN),
            (h::KEYCODE_KATAKANA_HIRAGANA, k::KEY_KATAKANAHIRAGANA),
            (h::KEYCODE_YEN, k::KEY_YEN),
            (h::KEYCODE_RO, k::KEY_RO),
        ]);
    }

    /// Translate a host key code to an evdev keycode
    ///
    /// Returns [`UNKNOWN_KEY`] for codes outside the table.
    pub fn map(&self, host_code: i32) -> u32 {
        self.table.get(&host_code).copied().unwrap_or(UNKNOWN_KEY)
    }

    /// Check if a host key code is mapped
    pub fn is_mapped(&self, host_code: i32) -> bool {
        self.table.contains_key(&host_code)
    }

    /// Get total number of mapped keys
    pub fn mapped_key_count(&self) -> usize {
        self.table.len()
    }
}

impl Default for KeyCodeMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_letters_and_digits() {
        let mapper = KeyCodeMapper::new();

        assert_eq!(mapper.map(h::KEYCODE_A), k::KEY_A);
        assert_eq!(mapper.map(h::KEYCODE_Q), k::KEY_Q);
        assert_eq!(mapper.map(h::KEYCODE_Z), k::KEY_Z);
        assert_eq!(mapper.map(h::KEYCODE_0), k::KEY_0);
        assert_eq!(mapper.map(h::KEYCODE_9), k::KEY_9);
    }

    #[test]
    fn test_every_letter_mapped() {
        let mapper = KeyCodeMapper::new();
        for host_code in h::KEYCODE_A..=h::KEYCODE_Z {
            assert!(
                mapper.is_mapped(host_code),
                "Host key {} not mapped",
                host_code
            );
        }
    }

    #[test]
    fn test_editing_keys() {
        let mapper = KeyCodeMapper::new();

        // DEL is backspace on the host, FORWARD_DEL is delete
        assert_eq!(mapper.map(h::KEYCODE_DEL), k::KEY_BACKSPACE);
        assert_eq!(mapper.map(h::KEYCODE_FORWARD_DEL), k::KEY_DELETE);
        assert_eq!(mapper.map(h::KEYCODE_ENTER), k::KEY_ENTER);
        assert_eq!(mapper.map(h::KEYCODE_ESCAPE), k::KEY_ESC);
    }

    #[test]
    fn test_navigation_keys() {
        let mapper = KeyCodeMapper::new();

        assert_eq!(mapper.map(h::KEYCODE_DPAD_UP), k::KEY_UP);
        assert_eq!(mapper.map(h::KEYCODE_DPAD_LEFT), k::KEY_LEFT);
        assert_eq!(mapper.map(h::KEYCODE_MOVE_HOME), k::KEY_HOME);
        assert_eq!(mapper.map(h::KEYCODE_HOME), k::KEY_HOMEPAGE);
        assert_eq!(mapper.map(h::KEYCODE_BACK), k::KEY_BACK);
    }

    #[test]
    fn test_function_keys() {
        let mapper = KeyCodeMapper::new();

        assert_eq!(mapper.map(h::KEYCODE_F1), k::KEY_F1);
        assert_eq!(mapper.map(h::KEYCODE_F10), k::KEY_F10);
        // F11/F12 are not contiguous with F10 on the device side
        assert_eq!(mapper.map(h::KEYCODE_F11), 87);
        assert_eq!(mapper.map(h::KEYCODE_F12), 88);
    }

    #[test]
    fn test_mute_keys_stay_distinct() {
        let mapper = KeyCodeMapper::new();

        assert_eq!(mapper.map(h::KEYCODE_VOLUME_MUTE), k::KEY_MUTE);
        assert_eq!(mapper.map(h::KEYCODE_MUTE), k::KEY_MICMUTE);
    }

    #[test]
    fn test_japanese_keys() {
        let mapper = KeyCodeMapper::new();

        assert_eq!(mapper.map(h::KEYCODE_HENKAN), 92);
        assert_eq!(mapper.map(h::KEYCODE_KATAKANA_HIRAGANA), 93);
        assert_eq!(mapper.map(h::KEYCODE_MUHENKAN), 94);
    }

    #[test]
    fn test_unknown_key_returns_sentinel() {
        let mapper = KeyCodeMapper::new();

        assert_eq!(mapper.map(0), UNKNOWN_KEY);
        assert_eq!(mapper.map(-5), UNKNOWN_KEY);
        assert_eq!(mapper.map(9999), UNKNOWN_KEY);
        assert!(!mapper.is_mapped(9999));
    }

    #[test]
    fn test_table_is_injective() {
        let mapper = KeyCodeMapper::new();

        let distinct: HashSet<u32> = mapper.table.values().copied().collect();
        assert_eq!(distinct.len(), mapper.mapped_key_count());
        assert!(!distinct.contains(&UNKNOWN_KEY));
    }

    #[test]
    fn test_mapped_key_count() {
        let mapper = KeyCodeMapper::new();
        assert!(mapper.mapped_key_count() > 150);
    }
}
