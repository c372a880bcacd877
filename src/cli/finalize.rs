//! Post-scan cross-validation.
//!
//! [`finalize`] runs once the dispatcher has consumed every token. It fills
//! derived settings, rejects combinations that cannot work together and
//! builds the encoder and teletext views. Derived values are recomputed
//! from scratch, so a second call on the same options gives the same result.

use crate::config::{TELETEXT_PAGE_MAX, TELETEXT_PAGE_MIN};
use crate::displaylevel;
use crate::error::ParamsError;
use crate::options::{
    CaptionField, EncoderConfig, Encoding, InputFormat, InputSource, Options, OutputFormat,
    TeletextConfig,
};
use crate::util::word_list::{
    add_builtin_words, sort_words, WordListLoader, CAPITALIZED_BUILTIN, PROFANE_BUILTIN,
};

/// Validate `opts` and complete its derived settings.
///
/// Word files named by `--capfile` / `--profanity-file` are read through
/// `loader`.
pub fn finalize(opts: &mut Options, loader: &dyn WordListLoader) -> Result<(), ParamsError> {
    if opts.input_format == Some(InputFormat::Mp4) && opts.input_source == InputSource::Stdin {
        return Err(ParamsError::Incompatible(
            "MP4 requires an actual file, it's not possible to read from a stream, including stdin"
                .to_owned(),
        ));
    }

    if opts.output.extract_chapters {
        displaylevel!(2, "Request to extract chapters received.\n");
        displaylevel!(2, "Note that this must only be used with MP4 files,\n");
        displaylevel!(2, "for other files it will simply generate subtitles file.\n\n");
    }

    if opts.gui_mode_reports {
        opts.no_progress_bar = true;
    }

    load_word_lists(opts, loader)?;

    if opts.demux.ts_forced_program.is_some() {
        opts.demux.ts_forced_program_selected = true;
    }

    if let Some(page) = opts.teletext.page {
        if !(i64::from(TELETEXT_PAGE_MIN)..=i64::from(TELETEXT_PAGE_MAX)).contains(&page) {
            return Err(ParamsError::Unclassified(format!(
                "teletext page number could not be lower than {TELETEXT_PAGE_MIN} or higher than {TELETEXT_PAGE_MAX}"
            )));
        }
    }

    check_input_sources(opts)?;
    check_format_combinations(opts)?;

    if opts.effective_output_format() == OutputFormat::WebVtt
        && opts.output.encoding != Encoding::Utf8
    {
        displaylevel!(2, "Note: Output format is WebVTT, forcing UTF-8\n");
        opts.output.encoding = Encoding::Utf8;
    }

    #[cfg(feature = "curl")]
    check_curl(opts)?;

    apply_caption_defaults(opts)?;

    opts.input_format = Some(opts.effective_input_format());
    opts.output_format = Some(opts.effective_output_format());
    opts.teletext_config = Some(TeletextConfig::from_options(opts));
    opts.encoder = Some(EncoderConfig::from_options(opts));
    Ok(())
}

fn load_word_lists(opts: &mut Options, loader: &dyn WordListLoader) -> Result<(), ParamsError> {
    opts.capitalization_list.clear();
    opts.profane_list.clear();

    if opts.output.sentence_cap {
        add_builtin_words(CAPITALIZED_BUILTIN, &mut opts.capitalization_list)?;
        if let Some(path) = &opts.sentence_cap_file {
            loader.load(path, &mut opts.capitalization_list)?;
        }
    }
    if opts.output.filter_profanity {
        add_builtin_words(PROFANE_BUILTIN, &mut opts.profane_list)?;
        if let Some(path) = &opts.filter_profanity_file {
            loader.load(path, &mut opts.profane_list)?;
        }
    }

    sort_words(&mut opts.capitalization_list);
    sort_words(&mut opts.profane_list);
    Ok(())
}

fn check_input_sources(opts: &mut Options) -> Result<(), ParamsError> {
    let files = opts.input_files.len();

    if files == 0 && opts.input_source == InputSource::File {
        return Err(ParamsError::NoInputFiles);
    }
    if files > 1 && opts.live_stream.is_on() {
        return Err(ParamsError::TooManyInputFiles(
            "live stream mode accepts only one input file".to_owned(),
        ));
    }
    if files > 0 {
        let reason = match opts.input_source {
            InputSource::Network => Some("UDP mode is not compatible with input files"),
            InputSource::Tcp => Some("TCP mode is not compatible with input files"),
            InputSource::Stdin => Some("reading from stdin is not compatible with input files"),
            InputSource::File => None,
        };
        if let Some(reason) = reason {
            return Err(ParamsError::TooManyInputFiles(reason.to_owned()));
        }
    }
    // Each datagram must be read whole.
    if matches!(opts.input_source, InputSource::Network | InputSource::Tcp) {
        opts.buffer.buffer_input = true;
    }
    Ok(())
}

fn check_format_combinations(opts: &Options) -> Result<(), ParamsError> {
    let input = opts.effective_input_format();
    let output = opts.effective_output_format();

    if input == InputFormat::Raw && output == OutputFormat::Raw {
        return Err(ParamsError::Incompatible(
            "--in=raw can only be used if the output is a subtitle file".to_owned(),
        ));
    }
    if input == InputFormat::Rcwt && output == OutputFormat::Rcwt && opts.output_filename.is_none()
    {
        return Err(ParamsError::Incompatible(
            "the binary format can only be used for both input and output if the output file name is given with -o"
                .to_owned(),
        ));
    }
    if output != OutputFormat::DvdRaw
        && opts.output.cc_to_stdout
        && opts.extract == CaptionField::Both
    {
        return Err(ParamsError::Incompatible(
            "you can't extract both fields to stdout at the same time in broadcast mode".to_owned(),
        ));
    }
    if output == OutputFormat::SpuPng && opts.output.cc_to_stdout {
        return Err(ParamsError::Incompatible(
            "you cannot use --out=spupng with --stdout".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(feature = "curl")]
fn check_curl(opts: &Options) -> Result<(), ParamsError> {
    let is_curl = opts.effective_output_format() == OutputFormat::Curl;
    match (is_curl, opts.curlposturl.is_some()) {
        (true, false) => Err(ParamsError::Incompatible(
            "you must pass a URL (--curlposturl) if output format is curl".to_owned(),
        )),
        (false, true) => Err(ParamsError::Incompatible(
            "--curlposturl requires that the format is curl".to_owned(),
        )),
        _ => Ok(()),
    }
}

// With neither standard requested both are extracted: 608 field 1 is on by
// default and every 708 service gets enabled. With only 708 requested the
// default 608 field is switched off.
fn apply_caption_defaults(opts: &mut Options) -> Result<(), ParamsError> {
    match (opts.is_608_enabled, opts.is_708_enabled) {
        (false, false) => opts.enable_services("all"),
        (false, true) => {
            opts.extract = CaptionField::Neither;
            Ok(())
        }
        _ => Ok(()),
    }
}
