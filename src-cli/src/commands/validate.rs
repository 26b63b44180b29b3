use std::io::Write;

use shpcode::{is_valid_code, normalize_query};

use super::{EXIT_INVALID, EXIT_OK};
use crate::cli::ValidateArgs;

/// Prints one verdict per code; fails if any code is invalid.
pub fn validate(args: &ValidateArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let mut all_valid = true;
    for raw in &args.codes {
        let candidate = if args.normalize {
            normalize_query(raw)
        } else {
            raw.clone()
        };
        let valid = is_valid_code(&candidate);
        all_valid &= valid;
        writeln!(
            out,
            "{}\t{}",
            candidate,
            if valid { "valid" } else { "invalid" }
        )?;
    }

    Ok(if all_valid {
        EXIT_OK
    } else {
        EXIT_INVALID
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(codes: &[&str], normalize: bool) -> (u8, String) {
        let args = ValidateArgs {
            codes: codes.iter().map(|s| s.to_string()).collect(),
            normalize,
        };
        let mut out = Vec::new();
        let status = validate(&args, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_all_valid() {
        let (status, text) = run(&["BR000000000042F", "BR123456789012M"], false);
        assert_eq!(status, EXIT_OK);
        assert_eq!(text, "BR000000000042F\tvalid\nBR123456789012M\tvalid\n");
    }

    #[test]
    fn test_any_invalid_fails() {
        let (status, text) = run(&["BR000000000042F", "br000000000042f"], false);
        assert_eq!(status, EXIT_INVALID);
        assert!(text.ends_with("br000000000042f\tinvalid\n"));
    }

    #[test]
    fn test_normalize_flag() {
        let (status, text) = run(&[" br000000000042t "], true);
        assert_eq!(status, EXIT_OK);
        assert_eq!(text, "BR000000000042T\tvalid\n");
    }
}
