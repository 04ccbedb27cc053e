//! 磁贴种类
//!
//! 静态表定义每种磁贴的标识符、名称和图标，内置表与调试表分开维护。

macro_rules! tile_kinds {
    (
        stock { $( $stock:ident => ($stock_spec:literal, $stock_label:literal, $stock_icon:literal), )* }
        debug { $( $debug:ident => ($debug_spec:literal, $debug_label:literal, $debug_icon:literal), )* }
    ) => {
        /// 磁贴种类
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TileKind {
            $( #[doc = $stock_label] $stock, )*
            $( #[doc = $debug_label] $debug, )*
        }

        impl TileKind {
            /// 内置磁贴，按注册顺序排列
            pub const STOCK: &'static [TileKind] = &[ $( TileKind::$stock, )* ];

            /// 调试专用磁贴
            pub const DEBUG: &'static [TileKind] = &[ $( TileKind::$debug, )* ];

            /// 磁贴标识符
            pub const fn spec(self) -> &'static str {
                match self {
                    $( TileKind::$stock => $stock_spec, )*
                    $( TileKind::$debug => $debug_spec, )*
                }
            }

            /// 显示名称
            pub const fn label(self) -> &'static str {
                match self {
                    $( TileKind::$stock => $stock_label, )*
                    $( TileKind::$debug => $debug_label, )*
                }
            }

            /// 图标资源名称
            pub const fn icon(self) -> &'static str {
                match self {
                    $( TileKind::$stock => $stock_icon, )*
                    $( TileKind::$debug => $debug_icon, )*
                }
            }
        }
    };
}

tile_kinds! {
    stock {
        Wifi => ("wifi", "Wi-Fi", "ic_qs_wifi"),
        Internet => ("internet", "Internet", "ic_qs_internet"),
        Bluetooth => ("bt", "Bluetooth", "ic_qs_bluetooth"),
        Cellular => ("cell", "Mobile data", "ic_qs_cellular"),
        Dnd => ("dnd", "Do not disturb", "ic_qs_dnd"),
        ColorInversion => ("inversion", "Color inversion", "ic_qs_inversion"),
        AirplaneMode => ("airplane", "Airplane mode", "ic_qs_airplane"),
        WorkMode => ("work", "Work profile", "ic_qs_work"),
        RotationLock => ("rotation", "Auto-rotate", "ic_qs_rotation"),
        Flashlight => ("flashlight", "Flashlight", "ic_qs_flashlight"),
        Location => ("location", "Location", "ic_qs_location"),
        Cast => ("cast", "Screen cast", "ic_qs_cast"),
        Hotspot => ("hotspot", "Hotspot", "ic_qs_hotspot"),
        User => ("user", "User", "ic_qs_user"),
        BatterySaver => ("battery", "Battery saver", "ic_qs_battery_saver"),
        DataSaver => ("saver", "Data saver", "ic_qs_data_saver"),
        NightDisplay => ("night", "Night light", "ic_qs_night_display"),
        Nfc => ("nfc", "NFC", "ic_qs_nfc"),
        UiModeNight => ("dark", "Dark theme", "ic_qs_ui_mode_night"),
        ScreenRecord => ("screenrecord", "Screen record", "ic_qs_screenrecord"),
        ReduceBrightColors => ("reduce_brightness", "Extra dim", "ic_qs_reduce_bright_colors"),
        CameraToggle => ("cameratoggle", "Camera access", "ic_qs_camera_access"),
        MicrophoneToggle => ("mictoggle", "Microphone access", "ic_qs_mic_access"),
        DeviceControls => ("controls", "Device controls", "ic_qs_device_controls"),
        Alarm => ("alarm", "Alarm", "ic_qs_alarm"),
        QuickAccessWallet => ("wallet", "Wallet", "ic_qs_wallet"),
        PowerShare => ("powershare", "Wireless PowerShare", "ic_qs_powershare"),
        Caffeine => ("caffeine", "Caffeine", "ic_qs_caffeine"),
        AmbientDisplay => ("ambient_display", "Ambient display", "ic_qs_ambient_display"),
        UsbTether => ("usb_tether", "USB tethering", "ic_qs_usb_tether"),
        Sync => ("sync", "Sync", "ic_qs_sync"),
        Sound => ("sound", "Sound", "ic_qs_sound"),
        Screenshot => ("screenshot", "Screenshot", "ic_qs_screenshot"),
        HeadsUp => ("heads_up", "Heads up", "ic_qs_heads_up"),
        GamingMode => ("gamingmode", "Gaming mode", "ic_qs_gaming_mode"),
        Reboot => ("reboot", "Reboot", "ic_qs_reboot"),
        OnTheGo => ("onthego", "On-The-Go mode", "ic_qs_onthego"),
        Evolver => ("evolver", "Evolver", "ic_qs_evolver"),
        VolumePanel => ("volume_panel", "Volume panel", "ic_qs_volume_panel"),
        Aod => ("aod", "Always on display", "ic_qs_aod"),
        DataSwitch => ("dataswitch", "Data switch", "ic_qs_data_switch"),
        FpsInfo => ("fpsinfo", "FPS info", "ic_qs_fps_info"),
        Compass => ("compass", "Compass", "ic_qs_compass"),
    }
    debug {
        Memory => ("memorytile", "Memory", "ic_qs_memory"),
    }
}

impl TileKind {
    /// 根据标识符查找种类，包括调试种类
    pub fn from_spec(spec: &str) -> Option<Self> {
        Self::STOCK
            .iter()
            .chain(Self::DEBUG)
            .copied()
            .find(|kind| kind.spec() == spec)
    }

    /// 是否为调试专用种类
    pub fn is_debug(self) -> bool {
        Self::DEBUG.contains(&self)
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spec())
    }
}
