// Integration tests for options/formats.rs — format selection side effects.

use ccx_params::options::{
    DateFormat, InputFormat, InputSource, MessagesTarget, Options, OutputFormat,
};

#[test]
fn dashes_are_optional() {
    let mut o = Options::default();
    o.set_output_format("--sami").unwrap();
    assert_eq!(o.output_format, Some(OutputFormat::Sami));
    o.set_output_format("smi").unwrap();
    assert_eq!(o.output_format, Some(OutputFormat::Sami));
}

#[test]
fn ass_selects_ssa_variant() {
    let mut o = Options::default();
    o.set_output_format("ass").unwrap();
    assert_eq!(o.output_format, Some(OutputFormat::Ssa));
    assert!(o.output.use_ass_instead_of_ssa);
}

#[test]
fn report_mode_is_quiet_null_output() {
    let mut o = Options::default();
    o.set_output_format("report").unwrap();
    assert_eq!(o.output_format, Some(OutputFormat::Null));
    assert_eq!(o.messages_target, MessagesTarget::Quiet);
    assert!(o.output.print_file_reports);
    assert!(o.demux.ts_allprogram);
}

#[test]
fn transcript_disables_708_rollup() {
    let mut o = Options::default();
    o.set_output_format("txt").unwrap();
    assert!(o.dtvcc.no_rollup);
    assert_eq!(o.timing.date_format, DateFormat::None);
}

#[test]
fn format_names_round_trip_through_setter() {
    for format in [
        OutputFormat::Srt,
        OutputFormat::WebVtt,
        OutputFormat::SmpteTt,
        OutputFormat::Rcwt,
        OutputFormat::SpuPng,
        OutputFormat::G608,
    ] {
        let mut o = Options::default();
        o.set_output_format(format.name()).unwrap();
        assert_eq!(o.output_format, Some(format));
    }
}

#[test]
fn input_aliases() {
    let mut o = Options::default();
    o.set_input_format("nots").unwrap();
    assert_eq!(o.input_format, Some(InputFormat::Program));
    o.set_input_format("m2ts").unwrap();
    assert!(o.demux.m2ts);
    o.set_input_format("ts").unwrap();
    assert!(!o.demux.m2ts);
}

#[test]
fn tcp_source_pins_binary_input() {
    let mut o = Options::default();
    o.input_source = InputSource::Tcp;
    o.set_input_format("mkv").unwrap();
    assert_eq!(o.input_format, Some(InputFormat::Rcwt));
}

#[test]
fn effective_formats_default() {
    let o = Options::default();
    assert_eq!(o.effective_input_format(), InputFormat::Auto);
    assert_eq!(o.effective_output_format(), OutputFormat::Srt);
}
