// Integration tests for cli/args.rs — the token scan.
//
// Covers:
//   - positional files, `-`/`--stdin` and help/version short-circuits
//   - value flags, optional-number flags and missing values
//   - the secondary `--hardsubx` table
//   - per-flag validation errors and their exit codes

use std::time::Duration;

use ccx_params::cli::args::{parse_args_from, Outcome};
use ccx_params::error::{ExitCode, GrammarError};
use ccx_params::options::{
    CaptionField, Codec, DateFormat, DebugFlags, Encoding, InputFormat, InputSource, LiveStream,
    MessagesTarget, OcrMode, Options, OutputFormat, SubColor,
};
use ccx_params::ParamsError;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn args(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| s.to_string()).collect()
}

fn parse(argv: &[&str]) -> Options {
    match parse_args_from(&args(argv)).expect("parse should succeed") {
        Outcome::Run(opts) => *opts,
        other => panic!("expected a configuration, got {other:?}"),
    }
}

fn parse_err(argv: &[&str]) -> ParamsError {
    parse_args_from(&args(argv)).expect_err("expected parse error")
}

// ─────────────────────────────────────────────────────────────────────────────
// Positional arguments and short-circuits
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn positional_files_are_queued_in_order() {
    let o = parse(&["a.ts", "--srt", "b.ts"]);
    assert_eq!(o.input_files, vec!["a.ts", "b.ts"]);
    assert_eq!(o.output_format, Some(OutputFormat::Srt));
}

#[test]
fn empty_token_is_ignored() {
    let o = parse(&["", "a.ts"]);
    assert_eq!(o.input_files, vec!["a.ts"]);
}

#[test]
fn lone_continuation_marker_is_a_file_name() {
    let o = parse(&["+"]);
    assert_eq!(o.input_files, vec!["+"]);
}

#[test]
fn help_stops_the_scan() {
    assert!(matches!(parse_args_from(&args(&["-h", "--bogus"])), Ok(Outcome::ShowHelp)));
    assert!(matches!(parse_args_from(&args(&["--help"])), Ok(Outcome::ShowHelp)));
    assert!(matches!(parse_args_from(&args(&["--version", "--bogus"])), Ok(Outcome::ShowVersion)));
}

#[test]
fn stdin_turns_on_live_stream() {
    let o = parse(&["-"]);
    assert_eq!(o.input_source, InputSource::Stdin);
    assert_eq!(o.live_stream, LiveStream::NoTimeout);

    let o = parse(&["--stream", "30", "--stdin"]);
    assert_eq!(o.live_stream, LiveStream::Timeout(30));
}

#[test]
fn unknown_flag_is_reported_verbatim() {
    let err = parse_err(&["--frobnicate"]);
    assert!(matches!(&err, ParamsError::UnrecognizedArgument(t) if t == "--frobnicate"));
    assert_eq!(err.exit_code(), ExitCode::IncompatibleParameters);
}

#[test]
fn missing_value_names_the_flag() {
    let err = parse_err(&["a.ts", "--delay"]);
    assert!(matches!(&err, ParamsError::MissingArgument { flag } if flag == "--delay"));
    assert_eq!(err.exit_code(), ExitCode::MalformedParameter);
}

// ─────────────────────────────────────────────────────────────────────────────
// Formats
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn in_and_out_prefixes() {
    let o = parse(&["--in=m2ts", "--out=webvtt-full"]);
    assert_eq!(o.input_format, Some(InputFormat::Transport));
    assert!(o.demux.m2ts);
    assert_eq!(o.output_format, Some(OutputFormat::WebVtt));
    assert!(o.output.use_webvtt_styling);
}

#[test]
fn unknown_formats_are_malformed() {
    assert_eq!(parse_err(&["--out=docx"]).exit_code(), ExitCode::MalformedParameter);
    assert_eq!(parse_err(&["--in=avi"]).exit_code(), ExitCode::MalformedParameter);
}

#[test]
fn shorthand_format_flags() {
    let o = parse(&["--dvr-ms", "--ttxt"]);
    assert_eq!(o.input_format, Some(InputFormat::Asf));
    assert_eq!(o.output_format, Some(OutputFormat::Transcript));
    assert_eq!(o.timing.date_format, DateFormat::HhMmSsMs);
    assert!(o.transcript.show_start_time);
}

#[test]
fn sendto_forces_binary_output() {
    let o = parse(&["--sendto", "example.org:3030", "--srt"]);
    assert!(o.network.send_to_srv);
    assert_eq!(o.output_format, Some(OutputFormat::Rcwt));
    assert_eq!(o.network.send_to_addr.as_deref(), Some("example.org"));
    assert_eq!(o.network.send_to_port.as_deref(), Some("3030"));
    assert_eq!(o.xmltv.mode, 2);
}

#[test]
fn sendto_ipv6_brackets() {
    let o = parse(&["--sendto", "[::1]:2048"]);
    assert_eq!(o.network.send_to_addr.as_deref(), Some("::1"));
    assert_eq!(o.network.send_to_port.as_deref(), Some("2048"));
    assert_eq!(parse_err(&["--sendto", "[::1"]).exit_code(), ExitCode::IncompatibleParameters);
}

#[test]
fn tcp_forces_binary_input() {
    let o = parse(&["--tcp", "2048", "--ts"]);
    assert_eq!(o.input_source, InputSource::Tcp);
    assert_eq!(o.network.tcp_port.as_deref(), Some("2048"));
    assert_eq!(o.input_format, Some(InputFormat::Rcwt));
}

// ─────────────────────────────────────────────────────────────────────────────
// Services, languages and fields
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn service_flag_enables_708() {
    let o = parse(&["--service", "1[EUC-KR],3"]);
    assert!(o.is_708_enabled);
    assert!(o.dtvcc.enabled);
    assert_eq!(o.dtvcc.services.active_count(), 2);
    assert_eq!(o.dtvcc.services.charset(1), Some("EUC-KR"));
    assert_eq!(o.dtvcc.services.charset(3), None);
}

#[test]
fn service_errors() {
    let err = parse_err(&["--service", "64"]);
    assert_eq!(err.exit_code(), ExitCode::MalformedParameter);
    let err = parse_err(&["--service", "1[UTF-8"]);
    assert!(matches!(
        err,
        ParamsError::MalformedGrammar { source: GrammarError::UnclosedCharset, .. }
    ));
}

#[test]
fn mkvlang_is_validated_and_lowercased() {
    let o = parse(&["--mkvlang", "ENG,fre-CA"]);
    assert_eq!(o.ocr.mkvlang.as_deref(), Some("eng,fre-ca"));
    assert!(matches!(
        parse_err(&["--mkvlang", "eng,fr"]),
        ParamsError::MalformedGrammar {
            source: GrammarError::LanguageCodeLength { last: true, .. },
            ..
        }
    ));
}

#[test]
fn output_field_values() {
    assert_eq!(parse(&["--output-field", "2"]).extract, CaptionField::Field2);
    assert_eq!(parse(&["--output-field", "both"]).extract, CaptionField::Both);
    assert_eq!(parse(&["--output-field", "12"]).extract, CaptionField::Both);
    assert!(parse(&["--output-field", "1"]).is_608_enabled);
    assert_eq!(parse_err(&["--output-field", "3"]).exit_code(), ExitCode::MalformedParameter);
}

#[test]
fn codec_choices() {
    assert_eq!(parse(&["--codec", "dvbsub"]).demux.codec, Some(Codec::DvbSub));
    assert_eq!(parse(&["--no-teletext"]).demux.nocodec, Some(Codec::Teletext));
    assert_eq!(parse_err(&["--codec", "mpeg"]).exit_code(), ExitCode::MalformedParameter);
}

// ─────────────────────────────────────────────────────────────────────────────
// Timing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn delay_and_window() {
    let o = parse(&["--delay", "-300", "--startat", "1:00", "--endat", "01:02:03"]);
    assert_eq!(o.timing.subs_delay, -300);
    assert_eq!(o.timing.extraction_start, Some(Duration::from_secs(60)));
    assert_eq!(o.timing.extraction_end, Some(Duration::from_secs(3723)));
}

#[test]
fn repeated_delay_keeps_the_last_value() {
    assert_eq!(parse(&["--delay", "5", "--delay", "7"]).timing.subs_delay, 7);
    assert_eq!(parse(&["--delay", "-20", "--delay", "0"]).timing.subs_delay, 0);
}

#[test]
fn bad_time_values() {
    assert_eq!(parse_err(&["--delay", "x"]).exit_code(), ExitCode::MalformedParameter);
    assert_eq!(parse_err(&["--startat", "1:99"]).exit_code(), ExitCode::MalformedParameter);
    assert_eq!(
        parse_err(&["--startcreditsforatmost", "1:2:3:4"]).exit_code(),
        ExitCode::MalformedParameter
    );
}

#[test]
fn credit_windows() {
    let o = parse(&["--startcreditstext", "Hi", "--startcreditsnotafter", "2:00"]);
    assert_eq!(o.credits.start_text.as_deref(), Some("Hi"));
    assert_eq!(o.credits.start_not_after, Duration::from_secs(120));
}

#[test]
fn unixts_zero_uses_current_time() {
    let o = parse(&["--unixts", "0"]);
    assert!(o.timing.utc_refvalue.unwrap() > 1_600_000_000);
    assert!(o.timing.noautotimeref);
    assert_eq!(parse(&["--unixts", "1000"]).timing.utc_refvalue, Some(1000));
}

#[test]
fn ucla_locks_transcript_fields() {
    let o = parse(&["--ucla", "--ttxt"]);
    assert!(o.transcript.is_final);
    assert!(o.transcript.show_cc);
    assert_eq!(o.timing.millis_separator, '.');
    assert_eq!(
        parse_err(&["--UCLA", "--customtxt", "1111111"]).exit_code(),
        ExitCode::IncompatibleParameters
    );
}

#[test]
fn customtxt_bits() {
    let o = parse(&["--customtxt", "1010101"]);
    assert!(o.transcript.show_start_time);
    assert!(!o.transcript.show_end_time);
    assert!(o.transcript.use_colors);
    assert_eq!(parse_err(&["--customtxt", "10102"]).exit_code(), ExitCode::MalformedParameter);
}

// ─────────────────────────────────────────────────────────────────────────────
// Optional numeric values
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stream_optional_seconds() {
    let o = parse(&["--stream", "file.ts"]);
    assert_eq!(o.live_stream, LiveStream::NoTimeout);
    assert_eq!(o.input_files, vec!["file.ts"]);
    assert_eq!(parse(&["-s", "0"]).live_stream, LiveStream::Off);
}

#[test]
fn program_number_optional() {
    let o = parse(&["--program-number", "3"]);
    assert_eq!(o.demux.ts_forced_program, Some(3));
    assert!(o.demux.ts_forced_program_selected);
    assert_eq!(parse(&["--program-number"]).demux.ts_forced_program, None);
}

#[test]
fn xmltv_flags() {
    let o = parse(&["--xmltv", "--xmltvliveinterval", "5", "--xmltvonlycurrent", "in.ts"]);
    assert_eq!(o.xmltv.mode, 1);
    assert_eq!(o.xmltv.live_interval, 5);
    assert!(o.xmltv.only_current);
    assert_eq!(o.input_files, vec!["in.ts"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Buffering, network and misc
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn buffersize_suffix_and_floor() {
    assert_eq!(parse(&["--buffersize", "1K"]).buffer.buffer_size, 1024);
    assert_eq!(parse(&["--buffersize", "2"]).buffer.buffer_size, 8);
    assert_eq!(parse_err(&["--buffersize", "big"]).exit_code(), ExitCode::MalformedParameter);
}

#[test]
fn buffersize_overflow_is_out_of_range() {
    let err = parse_err(&["--buffersize", "18446744073709551615M"]);
    assert!(matches!(&err, ParamsError::OutOfRange { flag, .. } if flag == "--buffersize"));
    assert_eq!(err.exit_code(), ExitCode::MalformedParameter);
    assert!(matches!(
        parse_err(&["--buffersize", "99999999999999999999999"]),
        ParamsError::OutOfRange { .. }
    ));
}

#[test]
fn udp_forms() {
    let o = parse(&["--udp", "1234"]);
    assert_eq!(o.input_source, InputSource::Network);
    assert_eq!(o.network.udp_port, Some(1234));
    assert_eq!(o.network.udp_addr, None);

    let o = parse(&["--udp", "10.0.0.1@239.1.1.1:5000"]);
    assert_eq!(o.network.udp_src.as_deref(), Some("10.0.0.1"));
    assert_eq!(o.network.udp_addr.as_deref(), Some("239.1.1.1"));
    assert_eq!(o.network.udp_port, Some(5000));

    assert_eq!(parse_err(&["--udp", "src@host"]).exit_code(), ExitCode::MalformedParameter);
    assert_eq!(parse_err(&["--udp", "70000"]).exit_code(), ExitCode::MalformedParameter);
}

#[test]
fn datapid_accumulates_hex_and_decimal() {
    let o = parse(&["--datapid", "0x1FF", "--datapid", "17"]);
    assert_eq!(o.demux.ts_cappids, vec![0x1FF, 17]);
}

#[test]
fn teletext_page_zero_means_unset() {
    assert_eq!(parse(&["--tpage", "888"]).teletext.page, Some(888));
    assert_eq!(parse(&["--tpage", "0"]).teletext.page, None);
}

#[test]
fn debug_flags_accumulate() {
    let o = parse(&["--debug", "--708", "--parsePAT", "--vides"]);
    assert!(o.debug.contains(DebugFlags::VERBOSE | DebugFlags::DECODER_708 | DebugFlags::PAT));
    assert!(o.debug.contains(DebugFlags::VIDES));
    assert!(o.analyze_video_stream);
}

#[test]
fn stdout_moves_messages_to_stderr() {
    let o = parse(&["--stdout"]);
    assert!(o.output.cc_to_stdout);
    assert_eq!(o.messages_target, MessagesTarget::Stderr);
    let o = parse(&["--quiet", "--stdout"]);
    assert_eq!(o.messages_target, MessagesTarget::Quiet);
}

#[test]
fn encoding_last_wins() {
    assert_eq!(parse(&["--latin1", "--unicode"]).output.encoding, Encoding::Unicode);
}

#[test]
fn levdist_and_ocr_values() {
    let o = parse(&["--no-levdist", "--levdistmincnt", "4", "--quant", "2", "--oem", "0"]);
    assert!(!o.levdist.enabled);
    assert_eq!(o.levdist.min_cnt, 4);
    assert_eq!(o.ocr.quantmode, 2);
    assert_eq!(o.ocr.oem, Some(0));
    assert_eq!(parse_err(&["--oem", "3"]).exit_code(), ExitCode::MalformedParameter);
}

// ─────────────────────────────────────────────────────────────────────────────
// Burned-in subtitle table
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hardsubx_flags_need_the_mode() {
    assert!(matches!(parse_err(&["--ocr-mode", "word"]), ParamsError::UnrecognizedArgument(_)));

    let o = parse(&[
        "--hardsubx", "--ocr-mode", "word", "--subcolor", "yellow", "--min-sub-duration", "1.5",
        "--conf-thresh", "40", "--lum-thresh", "80", "--detect-italics",
    ]);
    assert_eq!(o.hardsubx.ocr_mode, OcrMode::Word);
    assert_eq!(o.hardsubx.subcolor, SubColor::Yellow);
    assert_eq!(o.hardsubx.hue, 60.0);
    assert_eq!(o.hardsubx.min_sub_duration, 1.5);
    assert_eq!(o.hardsubx.conf_thresh, 40.0);
    assert_eq!(o.hardsubx.lum_thresh, 80.0);
    assert!(o.hardsubx.detect_italics);
}

#[test]
fn hardsubx_value_checks() {
    let bad = [
        ["--hardsubx", "--ocr-mode", "pixel"],
        ["--hardsubx", "--subcolor", "400"],
        ["--hardsubx", "--min-sub-duration", "0"],
        ["--hardsubx", "--conf-thresh", "0"],
        ["--hardsubx", "--lum-thresh", "101"],
    ];
    for argv in bad {
        assert_eq!(parse_err(&argv).exit_code(), ExitCode::MalformedParameter, "{argv:?}");
    }
    let o = parse(&["--hardsubx", "--subcolor", "90"]);
    assert_eq!(o.hardsubx.subcolor, SubColor::Custom);
    assert_eq!(o.hardsubx.hue, 90.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Dash and semaphore switches
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn sem_implies_autodash() {
    let o = parse(&["--sem", "x.ts"]);
    assert_eq!((o.output.autodash, o.output.with_semaphore), (true, true));
}

#[test]
fn autodash_leaves_semaphore_off() {
    let o = parse(&["--autodash", "x.ts"]);
    assert_eq!((o.output.autodash, o.output.with_semaphore), (true, false));
    let o = parse(&["x.ts"]);
    assert_eq!((o.output.autodash, o.output.with_semaphore), (false, false));
}

// ─────────────────────────────────────────────────────────────────────────────
// Sharing (feature `sharing`)
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "sharing")]
#[test]
fn translate_turns_on_sharing() {
    let o = parse(&["--translate", "ru,fr", "--translate-auth", "k3y", "x.ts"]);
    assert!(o.sharing.enabled);
    assert!(o.sharing.translate_enabled);
    assert_eq!(o.sharing.translate_langs.as_deref(), Some("ru,fr"));
    assert_eq!(o.sharing.translate_key.as_deref(), Some("k3y"));
    assert_eq!(o.sharing.url, "tcp://*:3269");
}

#[cfg(feature = "sharing")]
#[test]
fn sharing_url_and_debug() {
    let o = parse(&["--enable-sharing", "--sharing-url", "tcp://host:1", "--sharing-debug", "x.ts"]);
    assert!(o.sharing.enabled);
    assert!(!o.sharing.translate_enabled);
    assert_eq!(o.sharing.url, "tcp://host:1");
    assert!(o.debug.contains(DebugFlags::SHARE));
    assert!(matches!(
        parse_err(&["x.ts", "--sharing-url"]),
        ParamsError::MissingArgument { flag } if flag == "--sharing-url"
    ));
}

#[cfg(not(feature = "sharing"))]
#[test]
fn sharing_flags_need_the_feature() {
    assert!(matches!(
        parse_err(&["--enable-sharing", "x.ts"]),
        ParamsError::UnrecognizedArgument(_)
    ));
}
