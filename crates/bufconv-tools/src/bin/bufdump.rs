use bufconv::{
    convert_all, convert_strided, resolve, Converter, NativeArray, SourceType, TargetKind,
};
use std::process;

const USAGE: &str = "\
Usage: bufdump <input> <format> <target> [itemsize]

Decode every element of a raw binary file and print one value per line.

  <format>    buffer format, e.g. '<i', '>d', 'B'; '-' for raw bytes
  <target>    native kind: z b c s i j f d
  [itemsize]  bytes per element, defaults to the format's standard width";

fn kind_name(converter: &Converter) -> &'static str {
    match converter.target() {
        TargetKind::Boolean => "boolean",
        TargetKind::Byte => "byte",
        TargetKind::Char => "char",
        TargetKind::Short => "short",
        TargetKind::Int => "int",
        TargetKind::Long => "long",
        TargetKind::Float => "float",
        TargetKind::Double => "double",
    }
}

fn format_header(format: Option<&str>, converter: &Converter, count: usize) -> String {
    format!(
        "format '{}' -> {} ({} bytes/element, reversed: {}, {} elements)\n",
        format.unwrap_or("B"),
        kind_name(converter),
        converter.width(),
        converter.reversed(),
        count
    )
}

fn format_values(values: &NativeArray) -> String {
    let mut out = String::new();
    for i in 0..values.len() {
        if let Some(v) = values.get(i) {
            out.push_str(&format!("{}: {}\n", i, v));
        }
    }
    out
}

const ORDER_MARKERS: [char; 5] = ['!', '<', '>', '@', '='];

/// Default item size for a format: the width of its first type code.
fn standard_item_size(format: Option<&str>) -> usize {
    format
        .and_then(|f| f.trim_start_matches(ORDER_MARKERS).chars().next())
        .and_then(SourceType::from_code)
        .map(SourceType::width)
        .unwrap_or(1)
}

fn dump(
    data: &[u8],
    format: Option<&str>,
    target: char,
    itemsize: usize,
) -> Result<String, String> {
    let converter = resolve(format, itemsize, target).map_err(|e| e.to_string())?;
    // A padded element is wider than what the converter reads.
    let stride = itemsize.max(converter.width());
    let values = if stride == converter.width() {
        convert_all(&converter, data)
    } else {
        let count = if data.len() >= converter.width() {
            (data.len() - converter.width()) / stride + 1
        } else {
            0
        };
        convert_strided(&converter, data, stride, count)
    };

    let mut out = format_header(format, &converter, values.len());
    out.push_str(&format_values(&values));
    Ok(out)
}

fn run(args: &[String]) -> Result<String, String> {
    if args.len() < 3 || args.len() > 4 {
        return Err(USAGE.to_string());
    }

    let path = &args[0];
    let format = match args[1].as_str() {
        "-" => None,
        f => Some(f),
    };
    let mut target_chars = args[2].chars();
    let target = match (target_chars.next(), target_chars.next()) {
        (Some(c), None) => c,
        _ => return Err(format!("Invalid target kind: '{}'\n\n{}", args[2], USAGE)),
    };
    let itemsize = match args.get(3) {
        Some(s) => s
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("Invalid item size: '{}'", s))?,
        None => standard_item_size(format),
    };

    let data = std::fs::read(path).map_err(|e| format!("Error reading '{}': {}", path, e))?;
    dump(&data, format, target, itemsize)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    }
}
