use crate::log::render_changes;
use crate::{CorrectionRule, Options, RepairLogEntry, StreamRepairer};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE       Write output to FILE (default stdout)\n\
               --in-place          Overwrite INPUT file (implies non-streaming)\n\
               --stream            Repair while reading (lower memory)\n\
               --chunk-size BYTES  Chunk size for streaming (default 65536)\n\
               --log               Print the edit log to stderr\n\
               --json              Write a JSON report instead of plain code\n\
               --indent WIDTH      Spaces per block level (default 2)\n\
               --rule TYPO=FIX     Extra correction rule, may repeat\n\
               --no-typos          Disable typo correction\n\
               --no-call-fix       Disable bare call argument wrapping\n\
               --no-parens         Disable ')' balancing\n\
               --no-semicolons     Disable semicolon insertion\n\
               --no-reindent       Keep original leading whitespace\n\
               --no-close-blocks   Leave open blocks unclosed at end of input\n\
           -h, --help              Show this help\n",
        prog = program
    );
}

fn parse_args() -> (Options, CliMode) {
    let mut raw = env::args();
    let program = raw.next().unwrap_or_else(|| "scriptrepair".to_string());
    let args: Vec<String> = raw.collect();

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut in_place = false;
    let mut stream = false;
    let mut chunk_size: usize = 65536;
    let mut log = false;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--in-place" => {
                in_place = true;
            }
            "--stream" => {
                stream = true;
            }
            "--chunk-size" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing BYTES for --chunk-size");
                    std::process::exit(2);
                }
                chunk_size = args[i].parse().unwrap_or(65536);
            }
            "--log" => {
                log = true;
            }
            "--json" => {
                json = true;
            }
            "--indent" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing WIDTH for --indent");
                    std::process::exit(2);
                }
                opts.indent_width = args[i].parse().unwrap_or(2);
            }
            "--rule" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing TYPO=FIX for --rule");
                    std::process::exit(2);
                }
                match args[i].split_once('=') {
                    Some((typo, fix)) if !typo.is_empty() && !fix.is_empty() => {
                        opts.extra_rules.push(CorrectionRule::new(typo, fix));
                    }
                    _ => {
                        eprintln!("Expected TYPO=FIX for --rule, got: {}", args[i]);
                        std::process::exit(2);
                    }
                }
            }
            "--no-typos" => {
                opts.fix_typos = false;
            }
            "--no-call-fix" => {
                opts.fix_bare_call_argument = false;
            }
            "--no-parens" => {
                opts.balance_parens = false;
            }
            "--no-semicolons" => {
                opts.insert_semicolons = false;
            }
            "--no-reindent" => {
                opts.reindent = false;
            }
            "--no-close-blocks" => {
                opts.close_open_blocks = false;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    if in_place && json {
        eprintln!("--json cannot be combined with --in-place");
        std::process::exit(2);
    }

    // in-place and json imply non-streaming
    if in_place || json {
        stream = false;
    }

    let mode = CliMode {
        input,
        output,
        in_place,
        stream,
        chunk_size,
        log,
        json,
    };
    (opts, mode)
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    stream: bool,
    chunk_size: usize,
    log: bool,
    json: bool,
}

fn print_log(entries: &[RepairLogEntry]) {
    for change in render_changes(entries) {
        eprintln!("{}", change);
    }
}

fn emit_batch(
    content: &str,
    opts: &Options,
    mode: &CliMode,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    if mode.json {
        #[cfg(feature = "serde")]
        {
            let outcome = crate::repair_with_options(content, opts);
            let report = outcome.to_json_pretty()?;
            out.write_all(report.as_bytes())?;
            out.write_all(b"\n")?;
            if mode.log {
                for change in &outcome.changes {
                    eprintln!("{}", change);
                }
            }
            return Ok(());
        }
        #[cfg(not(feature = "serde"))]
        {
            return Err("--json requires the serde feature".into());
        }
    }
    let (fixed, entries) = crate::repair_to_string_with_log(content, opts);
    out.write_all(fixed.as_bytes())?;
    if mode.log {
        print_log(&entries);
    }
    Ok(())
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8")
}

/// Longest valid UTF-8 prefix of `pending`, decoded and drained. An
/// incomplete trailing sequence (at most 3 bytes) stays buffered for the
/// next read; a byte that can never start a valid sequence is an error.
fn drain_utf8_prefix(pending: &mut Vec<u8>) -> io::Result<String> {
    match String::from_utf8(std::mem::take(pending)) {
        Ok(chunk) => Ok(chunk),
        Err(err) if err.utf8_error().error_len().is_none() => {
            let valid = err.utf8_error().valid_up_to();
            let mut bytes = err.into_bytes();
            *pending = bytes.split_off(valid);
            String::from_utf8(bytes).map_err(|_| invalid_utf8())
        }
        Err(_) => Err(invalid_utf8()),
    }
}

/// Pumps `input` through `repairer` in chunk-sized reads. Reads are raw
/// bytes, so a multi-byte character split across two reads is held back
/// until the rest of it arrives.
fn stream_input<R: Read, W: Write>(
    input: &mut R,
    chunk_size: usize,
    repairer: &mut StreamRepairer,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut buf = vec![0u8; chunk_size.max(1024)];
    let mut pending: Vec<u8> = Vec::new();
    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        pending.extend_from_slice(&buf[..n]);
        let chunk = drain_utf8_prefix(&mut pending)?;
        repairer.push_to_writer(&chunk, out)?;
    }
    if !pending.is_empty() {
        // the input ended in the middle of a character
        return Err(invalid_utf8().into());
    }
    repairer.flush_to_writer(out)?;
    Ok(())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    // Resolve IO targets
    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    if mode.in_place {
        let inp = mode
            .input
            .as_ref()
            .ok_or("--in-place requires INPUT file")?;
        let content = fs::read_to_string(inp)?;
        let (fixed, entries) = crate::repair_to_string_with_log(&content, &opts);
        fs::write(inp, fixed)?;
        if mode.log {
            print_log(&entries);
        }
        return Ok(());
    }

    match (mode.stream, &mode.input) {
        (true, None) => {
            let mut r = StreamRepairer::new(opts.clone());
            let mut stdin = io::stdin();
            stream_input(&mut stdin, mode.chunk_size, &mut r, &mut out_writer)?;
            if mode.log {
                print_log(&r.take_log());
            }
        }
        (true, Some(path)) => {
            let mut reader = BufReader::new(File::open(path)?);
            let mut r = StreamRepairer::new(opts.clone());
            stream_input(&mut reader, mode.chunk_size, &mut r, &mut out_writer)?;
            if mode.log {
                print_log(&r.take_log());
            }
        }
        (false, None) => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            emit_batch(&content, &opts, &mode, &mut out_writer)?;
        }
        (false, Some(path)) => {
            let content = fs::read_to_string(path)?;
            emit_batch(&content, &opts, &mode, &mut out_writer)?;
        }
    }

    out_writer.flush()?;
    Ok(())
}
