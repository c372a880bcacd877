// cli/help.rs — Usage text and the detailed version report.
//
// Functions:
//   write_usage     → grouped flag reference, written to any `io::Write`
//   print_usage     → `write_usage` on stdout
//   file_sha256     → hex SHA-256 of a file, read in fixed-size chunks
//   version_report  → multi-line `--version` text for a given executable

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use sha2::{Digest, Sha256};

use crate::cli::constants::{DECODER_IMPLEMENTATION, GIT_COMMIT, PROGRAM_NAME, VERSION};
use crate::config::{
    LEVDIST_MAX_PCT_DEFAULT, LEVDIST_MIN_CNT_DEFAULT, MAX_SERVICES, XMLTV_LIVE_INTERVAL_DEFAULT,
};

const HASH_CHUNK: usize = 16 * 1024;

// ── Usage ────────────────────────────────────────────────────────────────────

/// Write the grouped flag reference to `out`.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{PROGRAM_NAME} {VERSION}, closed caption and teletext subtitle extractor")?;
    writeln!(out)?;
    writeln!(out, "Usage: ccextractor [options] inputfile1 [inputfile2...] [-o outputfilename]")?;
    writeln!(out)?;
    writeln!(out, "File name related options:")?;
    writeln!(out, "  inputfile     file(s) to process; a name ending in + (e.g. DVD001.VOB+)")?;
    writeln!(out, "                also queues DVD002.VOB, DVD003.VOB... while they exist")?;
    writeln!(out, "  -o outputname output file name (single output only)")?;
    writeln!(out, "  --stdin, -    read the input from standard input")?;
    writeln!(out, "  --videoedited don't join multiple input files; process them separately")?;
    writeln!(out, "  --multiprogram  one output file per program found in a transport stream")?;
    writeln!(out)?;
    writeln!(out, "Network support:")?;
    writeln!(out, "  --udp [[src@]host:]port  read from a UDP socket (multicast with src@)")?;
    writeln!(out, "  --tcp port               listen for a TCP client sending bin data")?;
    writeln!(out, "  --tcp-password pw        password expected from the TCP client")?;
    writeln!(out, "  --tcp-description text   description sent to the server with --sendto")?;
    writeln!(out, "  --sendto host[:port]     send captions in bin format to a server")?;
    writeln!(out)?;
    writeln!(out, "Input formats (default: autodetect):")?;
    writeln!(out, "  --in=ts|ps|es|asf|wtv|bin|raw|mp4|mkv|mxf|m2ts")?;
    writeln!(out, "  --ts --ps --es --asf --wtv --mp4 --mkv --dvr-ms  shorthand for --in=")?;
    writeln!(out)?;
    writeln!(out, "Output formats (default: srt):")?;
    writeln!(out, "  --out=srt|ass|ssa|webvtt|webvtt-full|sami|smptett|txt|ttxt|bin|raw|")?;
    writeln!(out, "        dvdraw|spupng|null|simplexml|g608|mcc|report")?;
    writeln!(out, "  --srt --sami --smi --txt --ttxt --webvtt --dvdraw --mcc --null")?;
    writeln!(out, "  --chapters    extract MP4 chapters to a text file")?;
    writeln!(out)?;
    writeln!(out, "Options that affect which data is extracted:")?;
    writeln!(out, "  --output-field 1|2|both  which 608 field(s) to process")?;
    writeln!(out, "  --cc2                    CC2 channel instead of CC1")?;
    writeln!(out, "  --service N[,M...]       CEA-708 services 1..{MAX_SERVICES}, optional [charset]")?;
    writeln!(out, "                           per service, or all[charset]")?;
    writeln!(out, "  --stream [secs]          live stream; stop after secs without data")?;
    writeln!(out, "  --program-number [N]     transport stream program to process")?;
    writeln!(out, "  --autoprogram            first program with captions")?;
    writeln!(out, "  --datapid PID            force the caption PID (hex with 0x)")?;
    writeln!(out, "  --datastreamtype T       caption stream type")?;
    writeln!(out, "  --streamtype T           assume stream type for --datapid")?;
    writeln!(out, "  --codec dvbsub|teletext  only this codec; --no-codec to exclude one")?;
    writeln!(out, "  --teletext / --no-teletext  force or disable teletext")?;
    writeln!(out, "  --tpage PAGE             teletext page (100..899)")?;
    writeln!(out)?;
    writeln!(out, "Timing:")?;
    writeln!(out, "  --delay ms               add ms (may be negative) to every timestamp")?;
    writeln!(out, "  --startat time, --endat time  [[hh:]mm:]ss extraction window")?;
    writeln!(out, "  --goptime --no-goptime   GOP timing policy")?;
    writeln!(out, "  --90090                  use 90090 as MPEG clock frequency")?;
    writeln!(out, "  --unixts ref             UTC reference in seconds (0 = now)")?;
    writeln!(out, "  --datets --sects --ucla --no-autotimeref")?;
    writeln!(out)?;
    writeln!(out, "Output text:")?;
    writeln!(out, "  --utf8 --unicode --latin1  output encoding (default utf8)")?;
    writeln!(out, "  --bom --no-bom            byte order mark")?;
    writeln!(out, "  --sentencecap            capitalize sentences; --capfile FILE adds words")?;
    writeln!(out, "  --kf                      filter profanity; --profanity-file FILE adds words")?;
    writeln!(out, "  --trim --splitbysentence --autodash --lf --df --no-fontcolor")?;
    writeln!(out, "  --no-htmlescape --no-typesetting --timestamp-map --webvtt-create-css")?;
    writeln!(out, "  --font FILE --italics FILE  fonts used for spupng rendering")?;
    writeln!(out, "  --customtxt XXXXXXX       transcript fields as seven 0/1 digits")?;
    writeln!(out, "  --xmltv [mode]            XMLTV output (1 full, 2 live, 3 both)")?;
    writeln!(out, "  --xmltvliveinterval secs  default {XMLTV_LIVE_INTERVAL_DEFAULT}")?;
    writeln!(out, "  --xmltvoutputinterval secs --xmltvonlycurrent")?;
    writeln!(out)?;
    writeln!(out, "Roll-up and 608 decoder:")?;
    writeln!(out, "  --ru1 --ru2 --ru3 --dru --no-rollup")?;
    writeln!(out, "  --defaultcolor #RRGGBB  --screenfuls N")?;
    writeln!(out)?;
    writeln!(out, "Teletext and OCR:")?;
    writeln!(out, "  --dvblang lang --ocrlang lang --mkvlang eng[,fre-ca...]")?;
    writeln!(out, "  --quant 0|1|2 --oem 0|1|2 --no-spupngocr --latrusmap")?;
    writeln!(out, "  --no-levdist  --levdistmincnt N (default {LEVDIST_MIN_CNT_DEFAULT})")?;
    writeln!(out, "  --levdistmaxpct N (default {LEVDIST_MAX_PCT_DEFAULT})")?;
    writeln!(out)?;
    writeln!(out, "Burned-in subtitles:")?;
    writeln!(out, "  --hardsubx  enable; then --ocr-mode frame|word|letter, --subcolor COLOR,")?;
    writeln!(out, "  --min-sub-duration secs, --detect-italics, --conf-thresh N,")?;
    writeln!(out, "  --whiteness-thresh N, --lum-thresh N, --hcc")?;
    writeln!(out)?;
    writeln!(out, "Credits:")?;
    writeln!(out, "  --startcreditstext TEXT --endcreditstext TEXT")?;
    writeln!(out, "  --startcreditsnotbefore --startcreditsnotafter time")?;
    writeln!(out, "  --startcreditsforatleast --startcreditsforatmost secs")?;
    writeln!(out, "  --endcreditsforatleast --endcreditsforatmost secs")?;
    writeln!(out)?;
    writeln!(out, "Buffering and messages:")?;
    writeln!(out, "  --bufferinput --no-bufferinput --buffersize N[K|M] --koc --forceflush")?;
    writeln!(out, "  --append --stdout --pesheader --quiet --gui-mode-reports --no-progress-bar")?;
    writeln!(out)?;
    #[cfg(feature = "sharing")]
    {
        writeln!(out, "Sharing and translation:")?;
        writeln!(out, "  --enable-sharing          share extracted captions in real time")?;
        writeln!(out, "  --sharing-url URL         nanomsg endpoint (default {})", crate::config::DEFAULT_SHARING_URL)?;
        writeln!(out, "  --translate LANGS         translate into a csv list of languages, e.g. ru,fr")?;
        writeln!(out, "  --translate-auth KEY      translation service credentials")?;
        writeln!(out, "  --sharing-debug           print sharing service messages")?;
        writeln!(out)?;
    }
    writeln!(out, "Debug:")?;
    writeln!(out, "  --debug --608 --708 --goppts --parsedebug --parsePAT --parsePMT --dumpdef")?;
    writeln!(out, "  --cbraw --debugdvbsub --vides --xdsdebug --tverbose --deblev")?;
    writeln!(out, "  --investigate-packets --analyzevideo --fullbin --no-sync")?;
    writeln!(out)?;
    writeln!(out, "  --help, -h    this text        --version    detailed version info")?;
    Ok(())
}

/// Print the usage text on stdout.
pub fn print_usage() {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    // A closed stdout is not worth reporting.
    let _ = write_usage(&mut lock).and_then(|()| lock.flush());
}

// ── Version ──────────────────────────────────────────────────────────────────

/// Hex-encoded SHA-256 of the file at `path`.
pub fn file_sha256(path: &Path) -> anyhow::Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; HASH_CHUNK];
    loop {
        let n = file
            .read(&mut buf)
            .with_context(|| format!("could not read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Build the `--version` report for the executable at `exe`.
///
/// A file that cannot be hashed is reported in place of the digest rather
/// than failing the whole report.
pub fn version_report(exe: &Path) -> String {
    let hash = file_sha256(exe).unwrap_or_else(|e| format!("{e:#}"));
    let mut report = String::new();
    report.push_str(&format!("{PROGRAM_NAME} detailed version info\n"));
    report.push_str(&format!("\tVersion: {VERSION}\n"));
    report.push_str(&format!("\tGit commit: {GIT_COMMIT}\n"));
    report.push_str(&format!("\tCEA-708 decoder: {DECODER_IMPLEMENTATION}\n"));
    report.push_str(&format!("\tFile SHA256: {hash}\n"));
    report
}
