//! The configuration record assembled from the command line.
//!
//! [`Options`] starts at its [`Default`] state, is mutated by the argument
//! dispatcher in [`crate::cli::args`] during a single left-to-right scan,
//! and is completed by [`crate::cli::finalize::finalize`]. After that it is
//! read-only for the rest of the run.
//!
//! | Submodule    | Responsibility |
//! |--------------|----------------|
//! | [`formats`]  | Input/output format enums and their name-based selectors. |
//! | [`services`] | CEA-708 `--service` grammar and the enabled-service set. |
//! | [`language`] | `--mkvlang` language-code list validation. |
//! | [`debug`]    | Debug-trace category bitset. |
//! | [`encoder`]  | Derived encoder-facing and teletext-facing views. |

pub mod debug;
pub mod encoder;
pub mod formats;
pub mod language;
pub mod services;

use std::time::Duration;

use crate::config::{
    DEFAULT_BUFFER_SIZE, END_CREDITS_FOR_AT_LEAST, END_CREDITS_FOR_AT_MOST, LEVDIST_MAX_PCT_DEFAULT,
    LEVDIST_MIN_CNT_DEFAULT, MPEG_CLOCK_FREQ, NO_BOM_DEFAULT, START_CREDITS_FOR_AT_LEAST,
    START_CREDITS_FOR_AT_MOST, START_CREDITS_NOT_AFTER, START_CREDITS_NOT_BEFORE,
};

pub use debug::DebugFlags;
pub use encoder::{EncoderConfig, TeletextConfig};
pub use formats::{InputFormat, OutputFormat};
pub use services::ServiceSelection;

// ── Small enumerations ───────────────────────────────────────────────────────

/// Where caption data is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    File,
    Stdin,
    /// UDP datagrams (`--udp`).
    Network,
    /// TCP server (`--tcp`).
    Tcp,
}

/// Live-stream mode: keep reading a growing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveStream {
    #[default]
    Off,
    /// Wait for more data forever.
    NoTimeout,
    /// Give up after this many seconds without new data.
    Timeout(u32),
}

impl LiveStream {
    pub fn is_on(self) -> bool {
        self != LiveStream::Off
    }
}

/// Which 608 field(s) to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionField {
    /// Legacy extraction disabled (only CEA-708 requested).
    Neither,
    #[default]
    Field1,
    Field2,
    Both,
}

/// Subtitle codec forced or excluded on the demuxer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Teletext,
    DvbSub,
}

/// Timestamp style of transcript-like outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[default]
    None,
    HhMmSsMs,
    /// Seconds since the epoch (`--sects`).
    Seconds,
    /// Calendar date (`--datets`).
    Date,
}

/// Use of GOP timestamps instead of PTS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GopTiming {
    #[default]
    Auto,
    /// `--goptime`
    Always,
    /// `--no-goptime`
    Never,
}

/// Character encoding of text outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    Unicode,
    #[default]
    Utf8,
    Latin1,
}

/// Destination of progress and diagnostic messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessagesTarget {
    Quiet,
    #[default]
    Stdout,
    Stderr,
}

/// OCR granularity for burned-in subtitles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcrMode {
    #[default]
    Frame,
    Word,
    Letter,
}

/// Colour of burned-in subtitles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubColor {
    #[default]
    White,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    Red,
    /// User-supplied hue, see [`HardsubxOptions::hue`].
    Custom,
}

// ── Sub-records ──────────────────────────────────────────────────────────────

/// Demuxer selection knobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemuxOptions {
    /// Transport stream with 4-byte timecode prefix.
    pub m2ts: bool,
    pub codec: Option<Codec>,
    pub nocodec: Option<Codec>,
    /// `None` means autodetect.
    pub ts_forced_program: Option<i64>,
    pub ts_forced_program_selected: bool,
    pub ts_autoprogram: bool,
    pub ts_allprogram: bool,
    /// Caption PIDs given with `--datapid`, in order.
    pub ts_cappids: Vec<i64>,
    pub ts_datastreamtype: Option<i64>,
    pub ts_forced_streamtype: Option<i64>,
}

/// CEA-608 decoder settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoder608Settings {
    pub direct_rollup: bool,
    pub no_rollup: bool,
    /// 0 keeps the stream's roll-up depth, 1..=3 forces it.
    pub force_rollup: u8,
    /// Stop after this many screenfuls; `None` processes everything.
    pub screens_to_process: Option<i64>,
    /// `#RRGGBB` colour used instead of white (`--defaultcolor`).
    pub default_color: Option<String>,
}

/// CEA-708 decoder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DtvccSettings {
    pub enabled: bool,
    pub no_rollup: bool,
    pub services: ServiceSelection,
}

/// Which parts of each caption line transcripts print.
///
/// The default shows neither timestamps nor mode, uses relative timestamps
/// and keeps colours (`0000101` in `--customtxt` notation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptSettings {
    pub show_start_time: bool,
    pub show_end_time: bool,
    pub show_mode: bool,
    pub show_cc: bool,
    pub relative_timestamp: bool,
    pub xds: bool,
    pub use_colors: bool,
    /// Locked by `--UCLA`; later transcript tweaks are refused.
    pub is_final: bool,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        TranscriptSettings {
            show_start_time: false,
            show_end_time: false,
            show_mode: false,
            show_cc: false,
            relative_timestamp: true,
            xds: false,
            use_colors: true,
            is_final: false,
        }
    }
}

/// Teletext switches set directly by flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeletextOptions {
    /// Forced page (`--tpage`); `None` picks the first subtitle page.
    pub page: Option<i64>,
    pub user_page: Option<i64>,
    pub verbose: bool,
    /// Map Latin characters to Cyrillic for Russian broadcasts.
    pub latrusmap: bool,
}

/// Extraction window, delays and timestamp rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingOptions {
    pub extraction_start: Option<Duration>,
    pub extraction_end: Option<Duration>,
    /// Milliseconds added to every timestamp; may be negative.
    pub subs_delay: i64,
    pub date_format: DateFormat,
    pub millis_separator: char,
    /// Seconds since the epoch used as the time reference (`--unixts`).
    pub utc_refvalue: Option<u64>,
    pub noautotimeref: bool,
    pub gop_timing: GopTiming,
    pub mpeg_clock_freq: u32,
}

impl Default for TimingOptions {
    fn default() -> Self {
        TimingOptions {
            extraction_start: None,
            extraction_end: None,
            subs_delay: 0,
            date_format: DateFormat::None,
            millis_separator: ',',
            utc_refvalue: None,
            noautotimeref: false,
            gop_timing: GopTiming::Auto,
            mpeg_clock_freq: MPEG_CLOCK_FREQ,
        }
    }
}

/// UDP input, TCP input and send-to-server addressing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Source address filter for multicast (`src@host:port`).
    pub udp_src: Option<String>,
    pub udp_addr: Option<String>,
    pub udp_port: Option<u16>,
    pub tcp_port: Option<String>,
    pub tcp_password: Option<String>,
    pub tcp_description: Option<String>,
    pub send_to_addr: Option<String>,
    pub send_to_port: Option<String>,
    pub send_to_srv: bool,
}

/// Real-time caption sharing and the translation service riding on it.
#[cfg(feature = "sharing")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharingOptions {
    pub enabled: bool,
    /// nanomsg endpoint.
    pub url: String,
    pub translate_enabled: bool,
    /// Target languages, comma separated.
    pub translate_langs: Option<String>,
    pub translate_key: Option<String>,
}

#[cfg(feature = "sharing")]
impl Default for SharingOptions {
    fn default() -> Self {
        SharingOptions {
            enabled: false,
            url: crate::config::DEFAULT_SHARING_URL.to_owned(),
            translate_enabled: false,
            translate_langs: None,
            translate_key: None,
        }
    }
}

/// Input buffering and output flushing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferPolicy {
    pub buffer_input: bool,
    /// Bytes; never below [`crate::config::MIN_BUFFER_SIZE`].
    pub buffer_size: usize,
    pub keep_output_closed: bool,
    pub force_flush: bool,
}

impl Default for BufferPolicy {
    fn default() -> Self {
        BufferPolicy {
            buffer_input: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
            keep_output_closed: false,
            force_flush: false,
        }
    }
}

/// Start/end credit insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditWindows {
    pub start_text: Option<String>,
    pub start_not_before: Duration,
    pub start_not_after: Duration,
    pub start_for_at_least: Duration,
    pub start_for_at_most: Duration,
    pub end_text: Option<String>,
    pub end_for_at_least: Duration,
    pub end_for_at_most: Duration,
}

impl Default for CreditWindows {
    fn default() -> Self {
        CreditWindows {
            start_text: None,
            start_not_before: START_CREDITS_NOT_BEFORE,
            start_not_after: START_CREDITS_NOT_AFTER,
            start_for_at_least: START_CREDITS_FOR_AT_LEAST,
            start_for_at_most: START_CREDITS_FOR_AT_MOST,
            end_text: None,
            end_for_at_least: END_CREDITS_FOR_AT_LEAST,
            end_for_at_most: END_CREDITS_FOR_AT_MOST,
        }
    }
}

/// Switches that end up in the encoder view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub encoding: Encoding,
    pub no_bom: bool,
    pub with_semaphore: bool,
    pub autodash: bool,
    pub trim_subs: bool,
    pub sentence_cap: bool,
    pub filter_profanity: bool,
    pub splitbysentence: bool,
    pub line_terminator_lf: bool,
    pub force_dropframe: bool,
    pub nospupngocr: bool,
    pub render_font: Option<String>,
    pub render_font_italics: Option<String>,
    pub no_font_color: bool,
    pub no_html_escape: bool,
    pub no_type_setting: bool,
    pub append_mode: bool,
    pub cc_to_stdout: bool,
    pub use_ass_instead_of_ssa: bool,
    pub use_webvtt_styling: bool,
    pub webvtt_create_css: bool,
    pub timestamp_map: bool,
    pub print_file_reports: bool,
    pub extract_chapters: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            encoding: Encoding::Utf8,
            no_bom: NO_BOM_DEFAULT,
            with_semaphore: false,
            autodash: false,
            trim_subs: false,
            sentence_cap: false,
            filter_profanity: false,
            splitbysentence: false,
            line_terminator_lf: false,
            force_dropframe: false,
            nospupngocr: false,
            render_font: None,
            render_font_italics: None,
            no_font_color: false,
            no_html_escape: false,
            no_type_setting: false,
            append_mode: false,
            cc_to_stdout: false,
            use_ass_instead_of_ssa: false,
            use_webvtt_styling: false,
            webvtt_create_css: false,
            timestamp_map: false,
            print_file_reports: false,
            extract_chapters: false,
        }
    }
}

/// Languages and tuning for bitmap-subtitle OCR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrOptions {
    pub dvblang: Option<String>,
    pub ocrlang: Option<String>,
    /// Validated, lowercased `--mkvlang` list.
    pub mkvlang: Option<String>,
    /// 0 none, 1 reduced palette (default), 2 aggressive.
    pub quantmode: u8,
    /// Tesseract engine mode; `None` lets the OCR stage choose.
    pub oem: Option<u8>,
}

impl Default for OcrOptions {
    fn default() -> Self {
        OcrOptions { dvblang: None, ocrlang: None, mkvlang: None, quantmode: 1, oem: None }
    }
}

/// Burned-in subtitle extraction (`--hardsubx` and its sub-flags).
#[derive(Debug, Clone, PartialEq)]
pub struct HardsubxOptions {
    pub enabled: bool,
    /// Also extract regular captions (`--hcc`).
    pub and_common: bool,
    pub ocr_mode: OcrMode,
    pub subcolor: SubColor,
    /// Hue in degrees.
    pub hue: f64,
    /// Seconds.
    pub min_sub_duration: f64,
    pub detect_italics: bool,
    pub conf_thresh: f64,
    pub lum_thresh: f64,
}

impl Default for HardsubxOptions {
    fn default() -> Self {
        HardsubxOptions {
            enabled: false,
            and_common: false,
            ocr_mode: OcrMode::Frame,
            subcolor: SubColor::White,
            hue: 0.0,
            min_sub_duration: 0.5,
            detect_italics: false,
            conf_thresh: 0.0,
            lum_thresh: 95.0,
        }
    }
}

/// XMLTV EPG output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmltvOptions {
    /// 0 off, 1 full file, 2 live, 3 both.
    pub mode: u32,
    pub live_interval: u32,
    pub output_interval: u32,
    pub only_current: bool,
}

/// Teletext typo correction by Levenshtein distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevenshteinOptions {
    pub enabled: bool,
    pub min_cnt: i64,
    pub max_pct: i64,
}

impl Default for LevenshteinOptions {
    fn default() -> Self {
        LevenshteinOptions {
            enabled: true,
            min_cnt: LEVDIST_MIN_CNT_DEFAULT,
            max_pct: LEVDIST_MAX_PCT_DEFAULT,
        }
    }
}

// ── The record ───────────────────────────────────────────────────────────────

/// Every setting the command line can influence.
#[derive(Debug, Clone)]
pub struct Options {
    /// Input paths in processing order.
    pub input_files: Vec<String>,
    pub input_source: InputSource,
    /// `None` until selected; the finalizer resolves it to [`InputFormat::Auto`].
    pub input_format: Option<InputFormat>,
    /// `None` until selected; the finalizer resolves it to [`OutputFormat::Srt`].
    pub output_format: Option<OutputFormat>,
    pub output_filename: Option<String>,

    pub demux: DemuxOptions,
    pub settings_608: Decoder608Settings,
    /// 608 extraction explicitly requested (`--output-field`).
    pub is_608_enabled: bool,
    pub extract: CaptionField,
    /// Caption channel within the field (1 or 2).
    pub cc_channel: u8,
    pub dtvcc: DtvccSettings,
    /// 708 extraction explicitly requested (`--service`).
    pub is_708_enabled: bool,
    pub transcript: TranscriptSettings,
    pub teletext: TeletextOptions,
    pub debug: DebugFlags,
    pub timing: TimingOptions,
    pub network: NetworkConfig,
    pub buffer: BufferPolicy,
    pub output: OutputSettings,
    pub credits: CreditWindows,
    pub ocr: OcrOptions,
    pub hardsubx: HardsubxOptions,
    pub xmltv: XmltvOptions,
    pub levdist: LevenshteinOptions,
    pub live_stream: LiveStream,
    pub messages_target: MessagesTarget,

    /// Treat multiple inputs as one continuous stream.
    pub binary_concat: bool,
    pub fix_padding: bool,
    pub noscte20: bool,
    pub usepicorder: bool,
    /// `None` autodetects MythTV streams.
    pub auto_myth: Option<bool>,
    pub wtvconvertfix: bool,
    pub wtvmpeg2: bool,
    pub hauppauge_mode: bool,
    pub mp4vidtrack: bool,
    pub investigate_packets: bool,
    pub fullbin: bool,
    pub nosync: bool,
    pub ignore_pts_jumps: bool,
    pub pes_header_to_stdout: bool,
    pub analyze_video_stream: bool,
    pub segment_on_key_frames_only: bool,
    /// Start a new output file every N seconds.
    pub out_interval: Option<i64>,
    pub gui_mode_reports: bool,
    pub no_progress_bar: bool,
    pub multiprogram: bool,
    pub ucla: bool,
    pub tickertext: bool,
    /// Set by `--no-rollup` for both decoders.
    pub no_rollup: bool,

    pub sentence_cap_file: Option<String>,
    pub filter_profanity_file: Option<String>,
    #[cfg(feature = "curl")]
    pub curlposturl: Option<String>,
    #[cfg(feature = "sharing")]
    pub sharing: SharingOptions,

    // Filled by the finalizer.
    pub capitalization_list: Vec<String>,
    pub profane_list: Vec<String>,
    pub teletext_config: Option<TeletextConfig>,
    pub encoder: Option<EncoderConfig>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input_files: Vec::new(),
            input_source: InputSource::File,
            input_format: None,
            output_format: None,
            output_filename: None,
            demux: DemuxOptions::default(),
            settings_608: Decoder608Settings::default(),
            is_608_enabled: false,
            extract: CaptionField::Field1,
            cc_channel: 1,
            dtvcc: DtvccSettings::default(),
            is_708_enabled: false,
            transcript: TranscriptSettings::default(),
            teletext: TeletextOptions::default(),
            debug: DebugFlags::default(),
            timing: TimingOptions::default(),
            network: NetworkConfig::default(),
            buffer: BufferPolicy::default(),
            output: OutputSettings::default(),
            credits: CreditWindows::default(),
            ocr: OcrOptions::default(),
            hardsubx: HardsubxOptions::default(),
            xmltv: XmltvOptions::default(),
            levdist: LevenshteinOptions::default(),
            live_stream: LiveStream::Off,
            messages_target: MessagesTarget::Stdout,
            binary_concat: true,
            fix_padding: false,
            noscte20: false,
            usepicorder: false,
            auto_myth: None,
            wtvconvertfix: false,
            wtvmpeg2: false,
            hauppauge_mode: false,
            mp4vidtrack: false,
            investigate_packets: false,
            fullbin: false,
            nosync: false,
            ignore_pts_jumps: true,
            pes_header_to_stdout: false,
            analyze_video_stream: false,
            segment_on_key_frames_only: false,
            out_interval: None,
            gui_mode_reports: false,
            no_progress_bar: false,
            multiprogram: false,
            ucla: false,
            tickertext: false,
            no_rollup: false,
            sentence_cap_file: None,
            filter_profanity_file: None,
            #[cfg(feature = "curl")]
            curlposturl: None,
            #[cfg(feature = "sharing")]
            sharing: SharingOptions::default(),
            capitalization_list: Vec::new(),
            profane_list: Vec::new(),
            teletext_config: None,
            encoder: None,
        }
    }
}

impl Options {
    /// Merge a `--service` list into the 708 selection and switch the 708
    /// decoder on.
    pub fn enable_services(&mut self, list: &str) -> Result<(), crate::error::ParamsError> {
        self.dtvcc.services.parse(list)?;
        self.dtvcc.enabled = true;
        Ok(())
    }

    /// Resolved input format (auto-detection when none was chosen).
    pub fn effective_input_format(&self) -> InputFormat {
        self.input_format.unwrap_or(InputFormat::Auto)
    }

    /// Resolved output format (SRT when none was chosen).
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or(OutputFormat::Srt)
    }
}
