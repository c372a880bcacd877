// options/encoder.rs — Derived views handed to the output and teletext stages.
//
// Both views are rebuilt from `Options` at the end of finalization, so
// running the finalizer twice produces the same views.

use std::time::Duration;

use crate::config::{DEFAULT_FONT_PATH, DEFAULT_FONT_PATH_ITALICS};
use crate::options::{
    CaptionField, CreditWindows, DateFormat, Encoding, Options, OutputFormat, ServiceSelection,
    TranscriptSettings,
};

/// Everything the subtitle encoders need, normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    pub extract: CaptionField,
    /// Legacy 608 output is suppressed; only 708 services are written.
    pub extract_only_708: bool,
    pub dtvcc_extract: bool,
    pub services: ServiceSelection,
    pub multiple_files: bool,
    pub first_input_file: Option<String>,
    /// `None` in multiprogram mode, where each program picks its own name.
    pub output_filename: Option<String>,
    pub cc_to_stdout: bool,
    pub write_format: OutputFormat,
    pub send_to_srv: bool,
    pub date_format: DateFormat,
    pub transcript_settings: TranscriptSettings,
    pub millis_separator: char,
    pub subs_delay: i64,
    pub encoding: Encoding,
    pub no_bom: bool,
    pub no_font_color: bool,
    pub no_type_setting: bool,
    pub force_flush: bool,
    pub append_mode: bool,
    pub ucla: bool,
    pub gui_mode_reports: bool,
    pub with_semaphore: bool,
    pub autodash: bool,
    pub trim_subs: bool,
    pub sentence_cap: bool,
    pub filter_profanity: bool,
    pub splitbysentence: bool,
    pub line_terminator_lf: bool,
    pub force_dropframe: bool,
    pub nospupngocr: bool,
    pub render_font: String,
    pub render_font_italics: String,
    pub credits: CreditWindows,
    #[cfg(feature = "curl")]
    pub curlposturl: Option<String>,
}

impl EncoderConfig {
    pub fn from_options(opts: &Options) -> Self {
        let output = &opts.output;
        let output_filename = if opts.multiprogram {
            None
        } else {
            opts.output_filename.clone()
        };

        EncoderConfig {
            extract: opts.extract,
            extract_only_708: !opts.is_608_enabled && opts.is_708_enabled,
            dtvcc_extract: opts.dtvcc.enabled,
            services: opts.dtvcc.services.clone(),
            multiple_files: !opts.input_files.is_empty(),
            first_input_file: opts.input_files.first().cloned(),
            output_filename,
            cc_to_stdout: output.cc_to_stdout,
            write_format: opts.effective_output_format(),
            send_to_srv: opts.network.send_to_srv,
            date_format: opts.timing.date_format,
            transcript_settings: opts.transcript,
            millis_separator: opts.timing.millis_separator,
            subs_delay: opts.timing.subs_delay,
            encoding: output.encoding,
            no_bom: output.no_bom,
            no_font_color: output.no_font_color,
            no_type_setting: output.no_type_setting,
            force_flush: opts.buffer.force_flush,
            append_mode: output.append_mode,
            ucla: opts.ucla,
            gui_mode_reports: opts.gui_mode_reports,
            with_semaphore: output.with_semaphore,
            autodash: output.autodash,
            trim_subs: output.trim_subs,
            sentence_cap: output.sentence_cap,
            filter_profanity: output.filter_profanity,
            splitbysentence: output.splitbysentence,
            line_terminator_lf: output.line_terminator_lf,
            force_dropframe: output.force_dropframe,
            nospupngocr: output.nospupngocr,
            render_font: output
                .render_font
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_PATH.to_owned()),
            render_font_italics: output
                .render_font_italics
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_PATH_ITALICS.to_owned()),
            credits: opts.credits.clone(),
            #[cfg(feature = "curl")]
            curlposturl: opts.curlposturl.clone(),
        }
    }
}

/// Settings shared with the teletext decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeletextConfig {
    pub page: Option<i64>,
    pub user_page: Option<i64>,
    pub verbose: bool,
    pub latrusmap: bool,
    pub dolevdist: bool,
    pub levdistmincnt: i64,
    pub levdistmaxpct: i64,
    pub extraction_start: Option<Duration>,
    pub extraction_end: Option<Duration>,
    pub write_format: OutputFormat,
    pub gui_mode_reports: bool,
    pub date_format: DateFormat,
    pub noautotimeref: bool,
    pub send_to_srv: bool,
    pub nofontcolor: bool,
    pub nohtmlescape: bool,
    pub millis_separator: char,
}

impl TeletextConfig {
    pub fn from_options(opts: &Options) -> Self {
        TeletextConfig {
            page: opts.teletext.page,
            user_page: opts.teletext.user_page,
            verbose: opts.teletext.verbose,
            latrusmap: opts.teletext.latrusmap,
            dolevdist: opts.levdist.enabled,
            levdistmincnt: opts.levdist.min_cnt,
            levdistmaxpct: opts.levdist.max_pct,
            extraction_start: opts.timing.extraction_start,
            extraction_end: opts.timing.extraction_end,
            write_format: opts.effective_output_format(),
            gui_mode_reports: opts.gui_mode_reports,
            date_format: opts.timing.date_format,
            noautotimeref: opts.timing.noautotimeref,
            send_to_srv: opts.network.send_to_srv,
            nofontcolor: opts.output.no_font_color,
            nohtmlescape: opts.output.no_html_escape,
            millis_separator: opts.timing.millis_separator,
        }
    }
}
