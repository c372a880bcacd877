// options/debug.rs — Debug message categories.
//
// Each debug switch on the command line ORs one category into the mask;
// downstream decoders test the mask before printing their traces.

use bitflags::bitflags;

bitflags! {
    /// Independent debug-trace categories selected on the command line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DebugFlags: u32 {
        /// `--parsedebug`: container parsing.
        const PARSE = 0x0001;
        /// `--vides`: video elementary stream headers.
        const VIDES = 0x0002;
        /// `--goppts`: GOP and PTS timing.
        const TIME = 0x0004;
        /// `--debug`: general verbose output.
        const VERBOSE = 0x0008;
        /// `--608`: CEA-608 decoder.
        const DECODER_608 = 0x0010;
        /// `--708`: CEA-708 decoder.
        const DECODER_708 = 0x0020;
        /// `--xdsdebug`: extended data services.
        const DECODER_XDS = 0x0040;
        /// `--cbraw`: raw caption blocks with timing.
        const CBRAW = 0x0080;
        const GENERIC_NOTICES = 0x0100;
        /// `--tverbose`: teletext decoder.
        const TELETEXT = 0x0200;
        /// `--parsePAT`.
        const PAT = 0x0400;
        /// `--parsePMT`.
        const PMT = 0x0800;
        /// `--deblev`: Levenshtein typo correction.
        const LEVENSHTEIN = 0x1000;
        /// `--debugdvbsub`.
        const DVB = 0x2000;
        /// `--dumpdef`: hex dump of defective TS packets.
        const DUMPDEF = 0x4000;
        /// `--sharing-debug`: caption sharing service messages.
        const SHARE = 0x8000;
    }
}
