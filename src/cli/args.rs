//! Command-line argument dispatch.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both walk the tokens once, left to right, and return an [`Outcome`]:
//! either the populated [`Options`] or a request to show help/version.
//! The result has not been cross-validated yet; see
//! [`crate::cli::finalize`] or use [`parse_parameters`] for both steps.
//!
//! Every flag is an entry of a static table mapping its spellings to a
//! [`Handler`]. Tokens that do not start with `-` are input files. While
//! `--hardsubx` is active a secondary table of burned-in-subtitle flags is
//! consulted first.
//!
//! The first bad token aborts the scan with a [`ParamsError`].

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::cli::arg_utils::{
    is_a_number, long_command_w_arg, parse_delay, parse_hex_or_decimal, parse_size, parse_time,
};
use crate::cli::finalize::finalize;
use crate::config::{
    CONTINUATION_MARKER, MIN_BUFFER_SIZE, MPEG_CLOCK_FREQ_90090, XMLTV_LIVE_INTERVAL_DEFAULT,
};
use crate::error::ParamsError;
use crate::options::language::validate_language_codes;
use crate::options::{
    CaptionField, Codec, DateFormat, DebugFlags, Encoding, GopTiming, InputSource, LiveStream,
    MessagesTarget, OcrMode, Options, SubColor,
};
use crate::util::file_sequence::{expand_file_sequence, queue_file};
use crate::util::word_list::FsWordListLoader;

// ── Public types ─────────────────────────────────────────────────────────────

/// Result of a complete scan.
#[derive(Debug)]
pub enum Outcome {
    /// Parsing succeeded; the options are ready for finalization (or were
    /// finalized, when produced by [`parse_parameters`]).
    Run(Box<Options>),
    /// `--help` / `-h` was seen; nothing after it was looked at.
    ShowHelp,
    /// `--version` was seen.
    ShowVersion,
}

/// What a flag does with the tokens that follow it.
#[derive(Clone, Copy)]
pub enum Handler {
    /// Takes no value and cannot fail.
    Switch(fn(&mut Options)),
    /// Takes no value but may reject the current state.
    Checked(fn(&mut Options) -> Result<(), ParamsError>),
    /// Consumes exactly the next token.
    Value(fn(&mut Options, &str) -> Result<(), ParamsError>),
    /// Consumes the next token only when it is an unsigned decimal number.
    OptionalNumber(fn(&mut Options, Option<&str>) -> Result<(), ParamsError>),
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Handler::Switch(_) => "Switch",
            Handler::Checked(_) => "Checked",
            Handler::Value(_) => "Value",
            Handler::OptionalNumber(_) => "OptionalNumber",
        };
        f.write_str(kind)
    }
}

/// One recognised flag and all of its spellings.
#[derive(Debug)]
pub struct Flag {
    pub names: &'static [&'static str],
    pub handler: Handler,
}

impl Flag {
    /// Whether the flag consumes a following token (always or sometimes).
    pub fn takes_value(&self) -> bool {
        matches!(self.handler, Handler::Value(_) | Handler::OptionalNumber(_))
    }
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Parse and finalize `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> Result<Outcome, ParamsError> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_parameters(&argv)
}

/// Scan `argv` and finalize the result with the filesystem word-list loader.
pub fn parse_parameters(argv: &[String]) -> Result<Outcome, ParamsError> {
    match parse_args_from(argv)? {
        Outcome::Run(mut opts) => {
            finalize(&mut opts, &FsWordListLoader)?;
            Ok(Outcome::Run(opts))
        }
        other => Ok(other),
    }
}

/// Scan an explicit argument list (argv[1..]) into a fresh [`Options`].
///
/// This variant is callable from tests without touching `std::env`.
pub fn parse_args_from(argv: &[String]) -> Result<Outcome, ParamsError> {
    let mut opts = Options::default();

    let mut idx = 0usize;
    while idx < argv.len() {
        let token = argv[idx].as_str();
        idx += 1;

        match token {
            "--help" | "-h" => return Ok(Outcome::ShowHelp),
            "--version" => return Ok(Outcome::ShowVersion),
            "-" | "--stdin" => {
                opts.input_source = InputSource::Stdin;
                if opts.live_stream == LiveStream::Off {
                    opts.live_stream = LiveStream::NoTimeout;
                }
                continue;
            }
            _ => {}
        }

        // ── Positional input file ────────────────────────────────────────────
        if !token.starts_with('-') {
            queue_positional(&mut opts, token)?;
            continue;
        }

        // ── `--in=FMT` / `--out=FMT` ────────────────────────────────────────
        if let Some(format) = long_command_w_arg(token, "--in=") {
            opts.set_input_format(format)?;
            continue;
        }
        if let Some(format) = long_command_w_arg(token, "--out=") {
            opts.set_output_format(format)?;
            continue;
        }

        let flag = lookup_flag(&opts, token)
            .ok_or_else(|| ParamsError::UnrecognizedArgument(token.to_owned()))?;

        match flag.handler {
            Handler::Switch(apply) => apply(&mut opts),
            Handler::Checked(apply) => apply(&mut opts)?,
            Handler::Value(apply) => {
                let value = argv.get(idx).ok_or_else(|| ParamsError::missing(token))?;
                idx += 1;
                apply(&mut opts, value)?;
            }
            Handler::OptionalNumber(apply) => {
                let value = argv.get(idx).map(String::as_str).filter(|v| is_a_number(v));
                if value.is_some() {
                    idx += 1;
                }
                apply(&mut opts, value)?;
            }
        }
    }

    Ok(Outcome::Run(Box::new(opts)))
}

/// Find the table entry for `token` given the modes active in `opts`.
pub fn lookup_flag(opts: &Options, token: &str) -> Option<&'static Flag> {
    if opts.hardsubx.enabled {
        if let Some(flag) = find(HARDSUBX_FLAGS, token) {
            return Some(flag);
        }
    }
    #[cfg(feature = "curl")]
    if let Some(flag) = find(CURL_FLAGS, token) {
        return Some(flag);
    }
    #[cfg(feature = "sharing")]
    if let Some(flag) = find(SHARING_FLAGS, token) {
        return Some(flag);
    }
    find(FLAGS, token)
}

fn find(table: &'static [Flag], token: &str) -> Option<&'static Flag> {
    table.iter().find(|flag| flag.names.iter().any(|name| *name == token))
}

fn queue_positional(opts: &mut Options, token: &str) -> Result<(), ParamsError> {
    if token.is_empty() {
        return Ok(());
    }
    match token.strip_suffix(CONTINUATION_MARKER) {
        Some(base) if !base.is_empty() => {
            expand_file_sequence(&mut opts.input_files, base)?;
        }
        _ => queue_file(&mut opts.input_files, token)?,
    }
    Ok(())
}

// ── Value helpers ────────────────────────────────────────────────────────────

fn integer(flag: &str, value: &str) -> Result<i64, ParamsError> {
    parse_hex_or_decimal(value)
        .ok_or_else(|| ParamsError::invalid(flag, format!("expects an integer, got `{value}`")))
}

fn unsigned(flag: &str, value: &str) -> Result<u32, ParamsError> {
    let n = integer(flag, value)?;
    u32::try_from(n).map_err(|_| ParamsError::out_of_range(flag, format!("{n} is out of range")))
}

fn time_value(flag: &str, value: &str) -> Result<Duration, ParamsError> {
    parse_time(value)
        .ok_or_else(|| ParamsError::invalid(flag, "only accepts SS, MM:SS or HH:MM:SS"))
}

fn float(flag: &str, value: &str) -> Result<f64, ParamsError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ParamsError::invalid(flag, format!("expects a number, got `{value}`")))
}

fn codec(flag: &str, value: &str) -> Result<Codec, ParamsError> {
    match value {
        "teletext" => Ok(Codec::Teletext),
        "dvbsub" => Ok(Codec::DvbSub),
        _ => Err(ParamsError::invalid(flag, "valid codecs are teletext and dvbsub")),
    }
}

fn small_choice(flag: &str, value: &str) -> Result<u8, ParamsError> {
    match integer(flag, value)? {
        n @ 0..=2 => Ok(n as u8),
        _ => Err(ParamsError::out_of_range(flag, "must be 0, 1 or 2")),
    }
}

fn percentage(flag: &str, value: &str) -> Result<f64, ParamsError> {
    let x = float(flag, value)?;
    if !(x > 0.0 && x <= 100.0) {
        return Err(ParamsError::out_of_range(flag, "valid values are in (0.0, 100.0]"));
    }
    Ok(x)
}

fn current_unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// ── Value handlers ───────────────────────────────────────────────────────────

fn set_buffer_size(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    let bytes = parse_size(value).ok_or_else(|| {
        if value.starts_with(|c: char| c.is_ascii_digit()) {
            ParamsError::out_of_range("--buffersize", "size does not fit in 64 bits")
        } else {
            ParamsError::invalid("--buffersize", "expects a size such as 16M or 512K")
        }
    })?;
    let bytes = usize::try_from(bytes).unwrap_or(usize::MAX);
    opts.buffer.buffer_size = bytes.max(MIN_BUFFER_SIZE);
    Ok(())
}

fn set_delay(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    opts.timing.subs_delay = parse_delay(value).ok_or_else(|| {
        ParamsError::invalid("--delay", "only accepts integers (such as -300 or 300)")
    })?;
    Ok(())
}

fn set_output_field(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    opts.extract = match value {
        "both" => CaptionField::Both,
        _ => match parse_hex_or_decimal(value) {
            Some(1) => CaptionField::Field1,
            Some(2) => CaptionField::Field2,
            Some(12) => CaptionField::Both,
            _ => {
                return Err(ParamsError::out_of_range(
                    "--output-field",
                    "only accepts 1 or 2 or both",
                ))
            }
        },
    };
    opts.is_608_enabled = true;
    Ok(())
}

fn set_default_color(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    if value.chars().count() != 7 || !value.starts_with('#') {
        return Err(ParamsError::invalid(
            "--defaultcolor",
            "expects a 7 character parameter that starts with #",
        ));
    }
    opts.settings_608.default_color = Some(value.to_owned());
    Ok(())
}

fn set_screenfuls(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    let n = integer("--screenfuls", value)?;
    if n < 0 {
        return Err(ParamsError::out_of_range(
            "--screenfuls",
            "only accepts non-negative integers",
        ));
    }
    opts.settings_608.screens_to_process = Some(n);
    Ok(())
}

fn set_services(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    opts.is_708_enabled = true;
    opts.enable_services(value)
}

fn set_mkvlang(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    let codes =
        validate_language_codes(value).map_err(|e| ParamsError::grammar("--mkvlang", e))?;
    opts.ocr.mkvlang = Some(codes);
    Ok(())
}

fn set_teletext_page(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    let page = integer("--tpage", value)?;
    let page = (page != 0).then_some(page);
    opts.teletext.page = page;
    opts.teletext.user_page = page;
    Ok(())
}

fn set_custom_transcript(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    let bits = value.as_bytes();
    if bits.len() != 7 || !bits.iter().all(|b| matches!(b, b'0' | b'1')) {
        return Err(ParamsError::invalid(
            "--customtxt",
            format!("custom TXT format not OK: {value}, expected 7 bits string"),
        ));
    }
    if opts.timing.date_format == DateFormat::None {
        opts.timing.date_format = DateFormat::HhMmSsMs;
    }
    if opts.transcript.is_final {
        return Err(ParamsError::Incompatible(
            "--customtxt cannot be set after --UCLA is used".to_owned(),
        ));
    }
    let t = &mut opts.transcript;
    t.show_start_time = bits[0] == b'1';
    t.show_end_time = bits[1] == b'1';
    t.show_mode = bits[2] == b'1';
    t.show_cc = bits[3] == b'1';
    t.relative_timestamp = bits[4] == b'1';
    t.xds = bits[5] == b'1';
    t.use_colors = bits[6] == b'1';
    Ok(())
}

fn set_ucla(opts: &mut Options) {
    opts.ucla = true;
    opts.timing.millis_separator = '.';
    opts.output.no_bom = true;
    let t = &mut opts.transcript;
    if !t.is_final {
        t.show_start_time = true;
        t.show_end_time = true;
        t.show_cc = true;
        t.show_mode = true;
        t.relative_timestamp = false;
        t.is_final = true;
    }
}

fn set_unix_timestamp(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    let t = integer("--unixts", value)?;
    let t = if t <= 0 { current_unix_time() } else { t as u64 };
    opts.timing.utc_refvalue = Some(t);
    opts.timing.noautotimeref = true;
    Ok(())
}

fn port(flag: &str, value: &str) -> Result<u16, ParamsError> {
    let n = integer(flag, value)?;
    u16::try_from(n).map_err(|_| ParamsError::out_of_range(flag, format!("invalid port {n}")))
}

/// `--udp [[src@]host:]port`
fn set_udp(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    let net = &mut opts.network;
    if let Some((src, rest)) = value.split_once('@') {
        let (addr, p) = rest.split_once(':').ok_or_else(|| {
            ParamsError::invalid("--udp", "if --udp contains an '@', it must also contain a ':'")
        })?;
        net.udp_src = Some(src.to_owned());
        net.udp_addr = Some(addr.to_owned());
        net.udp_port = Some(port("--udp", p)?);
    } else if let Some((addr, p)) = value.split_once(':') {
        net.udp_src = None;
        net.udp_addr = Some(addr.to_owned());
        net.udp_port = Some(port("--udp", p)?);
    } else {
        net.udp_src = None;
        net.udp_addr = None;
        net.udp_port = Some(port("--udp", value)?);
    }
    opts.input_source = InputSource::Network;
    Ok(())
}

/// `--sendto host[:port]` or `--sendto [ipv6]:port`
fn set_send_to(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    opts.network.send_to_srv = true;
    opts.set_output_format("bin")?;
    opts.xmltv.mode = 2;
    opts.xmltv.live_interval = 2;

    let (addr, port) = if let Some(bracketed) = value.strip_prefix('[') {
        let (addr, after) = bracketed.split_once(']').ok_or_else(|| {
            ParamsError::Incompatible("wrong address format, for IPv6 use [address]:port".to_owned())
        })?;
        let port = after.get(1..).filter(|p| !p.is_empty());
        (addr, port)
    } else {
        match value.split_once(':') {
            Some((addr, port)) => (addr, Some(port)),
            None => (value, None),
        }
    };
    opts.network.send_to_addr = Some(addr.to_owned());
    opts.network.send_to_port = port.map(str::to_owned);
    Ok(())
}

fn set_tcp(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    opts.network.tcp_port = Some(value.to_owned());
    opts.input_source = InputSource::Tcp;
    opts.set_input_format("bin")
}

fn set_stream(opts: &mut Options, value: Option<&str>) -> Result<(), ParamsError> {
    opts.live_stream = match value {
        None => LiveStream::NoTimeout,
        Some(v) => match unsigned("--stream", v)? {
            0 => LiveStream::Off,
            secs => LiveStream::Timeout(secs),
        },
    };
    Ok(())
}

fn set_program_number(opts: &mut Options, value: Option<&str>) -> Result<(), ParamsError> {
    match value {
        Some(v) => {
            opts.demux.ts_forced_program = Some(integer("--program-number", v)?);
            opts.demux.ts_forced_program_selected = true;
        }
        None => opts.demux.ts_forced_program = None,
    }
    Ok(())
}

// ── Burned-in subtitle handlers ──────────────────────────────────────────────

fn set_ocr_mode(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    opts.hardsubx.ocr_mode = match value {
        "simple" | "frame" => OcrMode::Frame,
        "word" => OcrMode::Word,
        "letter" | "symbol" => OcrMode::Letter,
        _ => {
            return Err(ParamsError::invalid(
                "--ocr-mode",
                "valid values are {frame,word,letter}",
            ))
        }
    };
    Ok(())
}

fn set_subcolor(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    let (color, hue) = match value {
        "white" => (SubColor::White, 0.0),
        "yellow" => (SubColor::Yellow, 60.0),
        "green" => (SubColor::Green, 120.0),
        "cyan" => (SubColor::Cyan, 180.0),
        "blue" => (SubColor::Blue, 240.0),
        "magenta" => (SubColor::Magenta, 300.0),
        "red" => (SubColor::Red, 0.0),
        custom => {
            let hue = float("--subcolor", custom)?;
            if !(hue > 0.0 && hue <= 360.0) {
                return Err(ParamsError::out_of_range(
                    "--subcolor",
                    "custom hue must be in (0, 360]; pass `red` or a small hue such as 0.1 for red",
                ));
            }
            (SubColor::Custom, hue)
        }
    };
    opts.hardsubx.subcolor = color;
    opts.hardsubx.hue = hue;
    Ok(())
}

fn set_min_sub_duration(opts: &mut Options, value: &str) -> Result<(), ParamsError> {
    let secs = float("--min-sub-duration", value)?;
    if !(secs > 0.0) {
        return Err(ParamsError::invalid("--min-sub-duration", "must be a positive number of seconds"));
    }
    opts.hardsubx.min_sub_duration = secs;
    Ok(())
}

// ── Tables ───────────────────────────────────────────────────────────────────

macro_rules! switch {
    ($($name:literal),+ => |$o:ident| $body:expr) => {
        Flag { names: &[$($name),+], handler: Handler::Switch(|$o: &mut Options| { $body; }) }
    };
}

macro_rules! debug_flag {
    ($($name:literal),+ => $bits:expr) => {
        Flag {
            names: &[$($name),+],
            handler: Handler::Switch(|o: &mut Options| o.debug |= $bits),
        }
    };
}

macro_rules! text_value {
    ($($name:literal),+ => |$o:ident, $v:ident| $body:expr) => {
        Flag {
            names: &[$($name),+],
            handler: Handler::Value(|$o: &mut Options, $v: &str| {
                $body;
                Ok(())
            }),
        }
    };
}

macro_rules! input_format {
    ($name:literal => $format:literal) => {
        Flag { names: &[$name], handler: Handler::Checked(|o: &mut Options| o.set_input_format($format)) }
    };
}

macro_rules! output_format {
    ($name:literal => $format:literal) => {
        Flag { names: &[$name], handler: Handler::Checked(|o: &mut Options| o.set_output_format($format)) }
    };
}

macro_rules! time_flag {
    ($name:literal => |$o:ident| $field:expr) => {
        Flag {
            names: &[$name],
            handler: Handler::Value(|$o: &mut Options, v: &str| {
                $field = time_value($name, v)?;
                Ok(())
            }),
        }
    };
}

/// Flags recognised only after `--hardsubx`.
pub static HARDSUBX_FLAGS: &[Flag] = &[
    switch!("--hcc" => |o| o.hardsubx.and_common = true),
    Flag { names: &["--ocr-mode"], handler: Handler::Value(set_ocr_mode) },
    Flag { names: &["--subcolor"], handler: Handler::Value(set_subcolor) },
    Flag { names: &["--min-sub-duration"], handler: Handler::Value(set_min_sub_duration) },
    switch!("--detect-italics" => |o| o.hardsubx.detect_italics = true),
    Flag {
        names: &["--conf-thresh"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.hardsubx.conf_thresh = percentage("--conf-thresh", v)?;
            Ok(())
        }),
    },
    Flag {
        names: &["--whiteness-thresh", "--lum-thresh"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.hardsubx.lum_thresh = percentage("--whiteness-thresh", v)?;
            Ok(())
        }),
    },
];

#[cfg(feature = "curl")]
pub static CURL_FLAGS: &[Flag] = &[text_value!("--curlposturl" => |o, v| o.curlposturl = Some(v.to_owned()))];

#[cfg(feature = "sharing")]
pub static SHARING_FLAGS: &[Flag] = &[
    debug_flag!("--sharing-debug" => DebugFlags::SHARE),
    switch!("--enable-sharing" => |o| o.sharing.enabled = true),
    text_value!("--sharing-url" => |o, v| o.sharing.url = v.to_owned()),
    text_value!("--translate" => |o, v| {
        o.sharing.translate_enabled = true;
        o.sharing.enabled = true;
        o.sharing.translate_langs = Some(v.to_owned())
    }),
    text_value!("--translate-auth" => |o, v| o.sharing.translate_key = Some(v.to_owned())),
];

/// Every flag recognised in normal mode.
pub static FLAGS: &[Flag] = &[
    // ── Input/output naming and formats ──────────────────────────────────────
    text_value!("-o" => |o, v| o.output_filename = Some(v.to_owned())),
    input_format!("--es" => "es"),
    input_format!("--ts" => "ts"),
    input_format!("--ps" => "ps"),
    input_format!("--asf" => "asf"),
    input_format!("--wtv" => "wtv"),
    input_format!("--mp4" => "mp4"),
    input_format!("--mkv" => "mkv"),
    input_format!("--dvr-ms" => "dvr-ms"),
    output_format!("--srt" => "srt"),
    output_format!("--mcc" => "mcc"),
    output_format!("--dvdraw" => "dvdraw"),
    output_format!("--smi" => "smi"),
    output_format!("--sami" => "sami"),
    output_format!("--txt" => "txt"),
    output_format!("--transcript" => "transcript"),
    output_format!("--ttxt" => "ttxt"),
    output_format!("--timedtranscript" => "timedtranscript"),
    output_format!("--webvtt" => "webvtt"),
    output_format!("--null" => "null"),
    switch!("--stdout" => |o| {
        if o.messages_target == MessagesTarget::Stdout {
            o.messages_target = MessagesTarget::Stderr;
        }
        o.output.cc_to_stdout = true
    }),
    switch!("--chapters" => |o| o.output.extract_chapters = true),
    switch!("--append" => |o| o.output.append_mode = true),
    // ── Buffering ────────────────────────────────────────────────────────────
    switch!("--bufferinput" => |o| o.buffer.buffer_input = true),
    switch!("--no-bufferinput" => |o| o.buffer.buffer_input = false),
    switch!("--koc" => |o| o.buffer.keep_output_closed = true),
    switch!("--forceflush" => |o| o.buffer.force_flush = true),
    Flag { names: &["--buffersize"], handler: Handler::Value(set_buffer_size) },
    // ── Demuxer ──────────────────────────────────────────────────────────────
    Flag {
        names: &["--codec"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.demux.codec = Some(codec("--codec", v)?);
            Ok(())
        }),
    },
    Flag {
        names: &["--no-codec"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.demux.nocodec = Some(codec("--no-codec", v)?);
            Ok(())
        }),
    },
    switch!("--teletext" => |o| o.demux.codec = Some(Codec::Teletext)),
    switch!("--no-teletext" => |o| o.demux.nocodec = Some(Codec::Teletext)),
    Flag { names: &["--program-number"], handler: Handler::OptionalNumber(set_program_number) },
    switch!("--autoprogram" => |o| o.demux.ts_autoprogram = true),
    switch!("--multiprogram" => |o| {
        o.multiprogram = true;
        o.demux.ts_allprogram = true
    }),
    Flag { names: &["--stream", "-s"], handler: Handler::OptionalNumber(set_stream) },
    Flag {
        names: &["--datapid"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            let pid = integer("--datapid", v)?;
            o.demux.ts_cappids.try_reserve(1).map_err(|e| {
                ParamsError::ResourceExhausted(format!("--datapid: {e}"))
            })?;
            o.demux.ts_cappids.push(pid);
            Ok(())
        }),
    },
    Flag {
        names: &["--datastreamtype"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.demux.ts_datastreamtype = Some(integer("--datastreamtype", v)?);
            Ok(())
        }),
    },
    Flag {
        names: &["--streamtype"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.demux.ts_forced_streamtype = Some(integer("--streamtype", v)?);
            Ok(())
        }),
    },
    switch!("--videoedited" => |o| o.binary_concat = false),
    switch!("--goptime" => |o| o.timing.gop_timing = GopTiming::Always),
    switch!("--no-goptime" => |o| o.timing.gop_timing = GopTiming::Never),
    switch!("--fixpadding" => |o| o.fix_padding = true),
    switch!("--90090" => |o| o.timing.mpeg_clock_freq = MPEG_CLOCK_FREQ_90090),
    switch!("--no-scte20" => |o| o.noscte20 = true),
    switch!("--usepicorder" => |o| o.usepicorder = true),
    switch!("--myth" => |o| o.auto_myth = Some(true)),
    switch!("--no-myth" => |o| o.auto_myth = Some(false)),
    switch!("--wtvconvertfix" => |o| o.wtvconvertfix = true),
    switch!("--wtvmpeg2" => |o| o.wtvmpeg2 = true),
    switch!("--hauppauge" => |o| o.hauppauge_mode = true),
    switch!("--mp4vidtrack" => |o| o.mp4vidtrack = true),
    switch!("--investigate-packets" => |o| o.investigate_packets = true),
    switch!("--fullbin" => |o| o.fullbin = true),
    switch!("--no-sync" => |o| o.nosync = true),
    switch!("--ignoreptsjumps" => |o| o.ignore_pts_jumps = true),
    switch!("--fixptsjumps" => |o| o.ignore_pts_jumps = false),
    switch!("--pesheader" => |o| o.pes_header_to_stdout = true),
    switch!("--analyzevideo" => |o| o.analyze_video_stream = true),
    switch!("--segmentonkeyonly" => |o| {
        o.segment_on_key_frames_only = true;
        o.analyze_video_stream = true
    }),
    // ── CEA-608 / CEA-708 ────────────────────────────────────────────────────
    switch!("--dru" => |o| o.settings_608.direct_rollup = true),
    switch!("--no-rollup" => |o| {
        o.no_rollup = true;
        o.settings_608.no_rollup = true;
        o.dtvcc.no_rollup = true
    }),
    switch!("--ru1" => |o| o.settings_608.force_rollup = 1),
    switch!("--ru2" => |o| o.settings_608.force_rollup = 2),
    switch!("--ru3" => |o| o.settings_608.force_rollup = 3),
    Flag { names: &["--defaultcolor"], handler: Handler::Value(set_default_color) },
    Flag { names: &["--screenfuls"], handler: Handler::Value(set_screenfuls) },
    Flag { names: &["--output-field"], handler: Handler::Value(set_output_field) },
    switch!("--cc2", "--CC2" => |o| o.cc_channel = 2),
    Flag { names: &["--service"], handler: Handler::Value(set_services) },
    // ── Output text handling ─────────────────────────────────────────────────
    switch!("--no-fontcolor" => |o| o.output.no_font_color = true),
    switch!("--no-htmlescape" => |o| o.output.no_html_escape = true),
    switch!("--no-typesetting" => |o| o.output.no_type_setting = true),
    switch!("--bom" => |o| o.output.no_bom = false),
    switch!("--no-bom" => |o| o.output.no_bom = true),
    switch!("--sem" => |o| {
        o.output.with_semaphore = true;
        o.output.autodash = true
    }),
    switch!("--autodash" => |o| o.output.autodash = true),
    switch!("--timestamp-map" => |o| o.output.timestamp_map = true),
    switch!("--webvtt-create-css" => |o| o.output.webvtt_create_css = true),
    switch!("--no-spupngocr" => |o| o.output.nospupngocr = true),
    switch!("--trim" => |o| o.output.trim_subs = true),
    switch!("--splitbysentence" => |o| o.output.splitbysentence = true),
    switch!("--sentencecap" => |o| o.output.sentence_cap = true),
    text_value!("--capfile" => |o, v| {
        o.output.sentence_cap = true;
        o.sentence_cap_file = Some(v.to_owned())
    }),
    switch!("--kf" => |o| o.output.filter_profanity = true),
    text_value!("--profanity-file" => |o, v| {
        o.output.filter_profanity = true;
        o.filter_profanity_file = Some(v.to_owned())
    }),
    switch!("--lf", "--LF" => |o| o.output.line_terminator_lf = true),
    switch!("--df", "--DF" => |o| o.output.force_dropframe = true),
    switch!("--unicode" => |o| o.output.encoding = Encoding::Unicode),
    switch!("--utf8" => |o| o.output.encoding = Encoding::Utf8),
    switch!("--latin1" => |o| o.output.encoding = Encoding::Latin1),
    text_value!("--font" => |o, v| o.output.render_font = Some(v.to_owned())),
    text_value!("--italics" => |o, v| o.output.render_font_italics = Some(v.to_owned())),
    Flag {
        names: &["--outinterval"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.out_interval = Some(integer("--outinterval", v)?);
            Ok(())
        }),
    },
    switch!("--gui-mode-reports" => |o| o.gui_mode_reports = true),
    switch!("--no-progress-bar" => |o| o.no_progress_bar = true),
    switch!("--tickertext", "--tickertape" => |o| o.tickertext = true),
    // ── Transcripts and timestamps ───────────────────────────────────────────
    Flag { names: &["--customtxt"], handler: Handler::Value(set_custom_transcript) },
    Flag { names: &["--UCLA", "--ucla"], handler: Handler::Switch(set_ucla) },
    switch!("--xds" => |o| o.transcript.xds = true),
    switch!("--sects" => |o| o.timing.date_format = DateFormat::Seconds),
    switch!("--datets" => |o| o.timing.date_format = DateFormat::Date),
    switch!("--no-autotimeref" => |o| o.timing.noautotimeref = true),
    Flag { names: &["--unixts"], handler: Handler::Value(set_unix_timestamp) },
    Flag { names: &["--delay"], handler: Handler::Value(set_delay) },
    Flag {
        names: &["--startat"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.timing.extraction_start = Some(time_value("--startat", v)?);
            Ok(())
        }),
    },
    Flag {
        names: &["--endat"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.timing.extraction_end = Some(time_value("--endat", v)?);
            Ok(())
        }),
    },
    // ── Credits ──────────────────────────────────────────────────────────────
    text_value!("--startcreditstext" => |o, v| o.credits.start_text = Some(v.to_owned())),
    time_flag!("--startcreditsnotbefore" => |o| o.credits.start_not_before),
    time_flag!("--startcreditsnotafter" => |o| o.credits.start_not_after),
    time_flag!("--startcreditsforatleast" => |o| o.credits.start_for_at_least),
    time_flag!("--startcreditsforatmost" => |o| o.credits.start_for_at_most),
    text_value!("--endcreditstext" => |o, v| o.credits.end_text = Some(v.to_owned())),
    time_flag!("--endcreditsforatleast" => |o| o.credits.end_for_at_least),
    time_flag!("--endcreditsforatmost" => |o| o.credits.end_for_at_most),
    // ── Debug ────────────────────────────────────────────────────────────────
    switch!("--quiet" => |o| o.messages_target = MessagesTarget::Quiet),
    debug_flag!("--debug" => DebugFlags::VERBOSE),
    debug_flag!("--608" => DebugFlags::DECODER_608),
    debug_flag!("--708" => DebugFlags::DECODER_708),
    debug_flag!("--deblev" => DebugFlags::LEVENSHTEIN),
    debug_flag!("--goppts" => DebugFlags::TIME),
    debug_flag!("--parsedebug" => DebugFlags::PARSE),
    debug_flag!("--parsePAT", "--parsepat" => DebugFlags::PAT),
    debug_flag!("--parsePMT", "--parsepmt" => DebugFlags::PMT),
    debug_flag!("--dumpdef" => DebugFlags::DUMPDEF),
    debug_flag!("--cbraw" => DebugFlags::CBRAW),
    debug_flag!("--debugdvbsub" => DebugFlags::DVB),
    switch!("--vides" => |o| {
        o.debug |= DebugFlags::VIDES;
        o.analyze_video_stream = true
    }),
    switch!("--xdsdebug" => |o| {
        o.transcript.xds = true;
        o.debug |= DebugFlags::DECODER_XDS
    }),
    switch!("--tverbose" => |o| {
        o.debug |= DebugFlags::TELETEXT;
        o.teletext.verbose = true
    }),
    // ── Levenshtein ──────────────────────────────────────────────────────────
    switch!("--no-levdist" => |o| o.levdist.enabled = false),
    Flag {
        names: &["--levdistmincnt"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.levdist.min_cnt = integer("--levdistmincnt", v)?;
            Ok(())
        }),
    },
    Flag {
        names: &["--levdistmaxpct"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.levdist.max_pct = integer("--levdistmaxpct", v)?;
            Ok(())
        }),
    },
    // ── OCR and languages ────────────────────────────────────────────────────
    text_value!("--dvblang" => |o, v| o.ocr.dvblang = Some(v.to_lowercase())),
    text_value!("--ocrlang" => |o, v| o.ocr.ocrlang = Some(v.to_owned())),
    Flag { names: &["--mkvlang"], handler: Handler::Value(set_mkvlang) },
    Flag {
        names: &["--quant"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.ocr.quantmode = small_choice("--quant", v)?;
            Ok(())
        }),
    },
    Flag {
        names: &["--oem"],
        handler: Handler::Value(|o: &mut Options, v: &str| {
            o.ocr.oem = Some(small_choice("--oem", v)?);
            Ok(())
        }),
    },
    switch!("--hardsubx" => |o| o.hardsubx.enabled = true),
    // ── Teletext ─────────────────────────────────────────────────────────────
    Flag { names: &["--tpage"], handler: Handler::Value(set_teletext_page) },
    switch!("--latrusmap" => |o| o.teletext.latrusmap = true),
    // ── XMLTV ────────────────────────────────────────────────────────────────
    Flag {
        names: &["--xmltv"],
        handler: Handler::OptionalNumber(|o: &mut Options, v: Option<&str>| {
            o.xmltv.mode = v.map_or(Ok(1), |v| unsigned("--xmltv", v))?;
            Ok(())
        }),
    },
    Flag {
        names: &["--xmltvliveinterval"],
        handler: Handler::OptionalNumber(|o: &mut Options, v: Option<&str>| {
            o.xmltv.live_interval = v.map_or(Ok(XMLTV_LIVE_INTERVAL_DEFAULT), |v| {
                unsigned("--xmltvliveinterval", v)
            })?;
            Ok(())
        }),
    },
    Flag {
        names: &["--xmltvoutputinterval"],
        handler: Handler::OptionalNumber(|o: &mut Options, v: Option<&str>| {
            o.xmltv.output_interval =
                v.map_or(Ok(0), |v| unsigned("--xmltvoutputinterval", v))?;
            Ok(())
        }),
    },
    switch!("--xmltvonlycurrent" => |o| o.xmltv.only_current = true),
    // ── Network ──────────────────────────────────────────────────────────────
    Flag { names: &["--udp"], handler: Handler::Value(set_udp) },
    Flag { names: &["--sendto"], handler: Handler::Value(set_send_to) },
    Flag { names: &["--tcp"], handler: Handler::Value(set_tcp) },
    text_value!("--tcp-password" => |o, v| o.network.tcp_password = Some(v.to_owned())),
    text_value!("--tcp-description" => |o, v| o.network.tcp_description = Some(v.to_owned())),
];
