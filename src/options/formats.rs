// options/formats.rs — Input and output format selection.
//
// Both axes are closed enumerations. Selecting a format by name may carry
// side effects on neighbouring settings (the `ass` flavour of SSA, the
// timestamps shown by a timed transcript, the report mode, ...), so the
// selectors live on `Options` rather than on the enums.

use crate::displaylevel;
use crate::error::ParamsError;
use crate::options::{DateFormat, InputSource, MessagesTarget, Options};

/// Container/stream type of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// Probe the input and pick the matching demuxer.
    Auto,
    Elementary,
    Transport,
    Program,
    Asf,
    Wtv,
    /// McPoodle's raw caption dump.
    Raw,
    /// The extractor's own binary caption format.
    Rcwt,
    Mp4,
    Mkv,
    Mxf,
}

/// Subtitle/caption file type written by the encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Srt,
    Ssa,
    Ccd,
    Scc,
    WebVtt,
    Sami,
    Transcript,
    Null,
    Raw,
    SmpteTt,
    /// The extractor's own binary caption format (`bin`).
    Rcwt,
    DvdRaw,
    SpuPng,
    SimpleXml,
    G608,
    Mcc,
    #[cfg(feature = "curl")]
    Curl,
}

impl OutputFormat {
    /// Canonical `--out=` name.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Srt => "srt",
            OutputFormat::Ssa => "ssa",
            OutputFormat::Ccd => "ccd",
            OutputFormat::Scc => "scc",
            OutputFormat::WebVtt => "webvtt",
            OutputFormat::Sami => "sami",
            OutputFormat::Transcript => "transcript",
            OutputFormat::Null => "null",
            OutputFormat::Raw => "raw",
            OutputFormat::SmpteTt => "smptett",
            OutputFormat::Rcwt => "bin",
            OutputFormat::DvdRaw => "dvdraw",
            OutputFormat::SpuPng => "spupng",
            OutputFormat::SimpleXml => "simplexml",
            OutputFormat::G608 => "g608",
            OutputFormat::Mcc => "mcc",
            #[cfg(feature = "curl")]
            OutputFormat::Curl => "curl",
        }
    }
}

impl Options {
    /// Select the output format by name (`--out=NAME` or a shorthand flag).
    ///
    /// Leading dashes are ignored so that `--srt` and `srt` are equivalent.
    /// While sending to a server every format is coerced to `bin`.
    pub fn set_output_format(&mut self, name: &str) -> Result<(), ParamsError> {
        let mut name = name.trim_start_matches('-');

        if self.network.send_to_srv && name != "bin" {
            displaylevel!(2, "Output format is changed to bin\n");
            name = "bin";
        }

        let format = match name {
            "ass" => {
                self.output.use_ass_instead_of_ssa = true;
                OutputFormat::Ssa
            }
            "ccd" => OutputFormat::Ccd,
            "scc" => OutputFormat::Scc,
            "srt" => OutputFormat::Srt,
            "ssa" => OutputFormat::Ssa,
            "webvtt" => OutputFormat::WebVtt,
            "webvtt-full" => {
                self.output.use_webvtt_styling = true;
                OutputFormat::WebVtt
            }
            "sami" | "smi" => OutputFormat::Sami,
            "transcript" | "txt" => {
                self.dtvcc.no_rollup = true;
                OutputFormat::Transcript
            }
            "timedtranscript" | "ttxt" => {
                if self.timing.date_format == DateFormat::None {
                    self.timing.date_format = DateFormat::HhMmSsMs;
                }
                if !self.transcript.is_final {
                    self.transcript.show_start_time = true;
                    self.transcript.show_end_time = true;
                    self.transcript.show_cc = false;
                    self.transcript.show_mode = true;
                }
                OutputFormat::Transcript
            }
            "report" => {
                self.messages_target = MessagesTarget::Quiet;
                self.output.print_file_reports = true;
                self.demux.ts_allprogram = true;
                OutputFormat::Null
            }
            "raw" => OutputFormat::Raw,
            "smptett" => OutputFormat::SmpteTt,
            "bin" => OutputFormat::Rcwt,
            "null" => OutputFormat::Null,
            "dvdraw" => OutputFormat::DvdRaw,
            "spupng" => OutputFormat::SpuPng,
            "simplexml" => OutputFormat::SimpleXml,
            "g608" => OutputFormat::G608,
            #[cfg(feature = "curl")]
            "curl" => OutputFormat::Curl,
            "mcc" => OutputFormat::Mcc,
            other => {
                return Err(ParamsError::invalid(
                    "--out",
                    format!("unknown output file format: {other}"),
                ))
            }
        };
        self.output_format = Some(format);
        Ok(())
    }

    /// Select the input format by name (`--in=NAME` or a shorthand flag).
    ///
    /// A TCP source only ever carries the binary format, so any other name is
    /// coerced to `bin`.
    pub fn set_input_format(&mut self, name: &str) -> Result<(), ParamsError> {
        let mut name = name.trim_start_matches('-');

        if self.input_source == InputSource::Tcp && name != "bin" {
            displaylevel!(2, "Input format is changed to bin\n");
            name = "bin";
        }

        let format = match name {
            "es" => InputFormat::Elementary,
            "ts" => {
                self.demux.m2ts = false;
                InputFormat::Transport
            }
            "m2ts" => {
                self.demux.m2ts = true;
                InputFormat::Transport
            }
            "ps" | "nots" => InputFormat::Program,
            "asf" | "dvr-ms" => InputFormat::Asf,
            "wtv" => InputFormat::Wtv,
            "raw" => InputFormat::Raw,
            "bin" => InputFormat::Rcwt,
            "mp4" => InputFormat::Mp4,
            "mkv" => InputFormat::Mkv,
            "mxf" => InputFormat::Mxf,
            other => {
                return Err(ParamsError::invalid(
                    "--in",
                    format!("unknown input file format: {other}"),
                ))
            }
        };
        self.input_format = Some(format);
        Ok(())
    }
}
