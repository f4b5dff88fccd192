//! Line prompts for values missing from the command line

use std::cell::RefCell;
use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};
use crate::validate::RetryPolicy;

/// Print `label` and read one line of input
///
/// End of input is an I/O error so retry loops stop instead of spinning.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, label: &str) -> LedgerResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(LedgerError::Io("input closed before a value was entered".into()));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt until `parse` accepts the input or `policy` runs out
pub fn prompt_with<T, R, W, P>(
    input: &mut R,
    output: &mut W,
    label: &str,
    policy: RetryPolicy,
    parse: P,
) -> LedgerResult<T>
where
    R: BufRead,
    W: Write,
    P: Fn(&str) -> LedgerResult<T>,
{
    let output = RefCell::new(output);
    policy.run(
        || {
            let line = prompt_line(input, &mut *output.borrow_mut(), label)?;
            parse(&line)
        },
        |e| Ok(writeln!(output.borrow_mut(), "{}", e)?),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::parse_amount;
    use std::io::{self, Cursor};

    /// Accepts prompts but fails to print error messages
    struct NoErrorOutput;

    impl Write for NoErrorOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if String::from_utf8_lossy(buf).contains("error") {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_prompt_line() {
        let mut input = Cursor::new("hello\n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Name: ").unwrap();
        assert_eq!(line, "hello");
        assert_eq!(String::from_utf8(output).unwrap(), "Name: ");
    }

    #[test]
    fn test_prompt_line_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt_line(&mut input, &mut output, "Name: ").unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
    }

    #[test]
    fn test_prompt_with_retries() {
        let mut input = Cursor::new("zero\n0\n42.5\n");
        let mut output = Vec::new();

        let amount = prompt_with(
            &mut input,
            &mut output,
            "Amount: ",
            RetryPolicy::bounded(3),
            parse_amount,
        )
        .unwrap();

        assert_eq!(amount, 42.5);
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Amount: ").count(), 3);
        assert!(printed.contains("Invalid amount 'zero'"));
    }

    #[test]
    fn test_prompt_with_gives_up() {
        let mut input = Cursor::new("x\ny\nz\n");
        let mut output = Vec::new();

        let err = prompt_with(
            &mut input,
            &mut output,
            "Amount: ",
            RetryPolicy::bounded(2),
            parse_amount,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_prompt_with_stops_when_message_cannot_be_printed() {
        let mut input = Cursor::new("x\n5\n");
        let mut output = NoErrorOutput;

        let err = prompt_with(
            &mut input,
            &mut output,
            "Amount: ",
            RetryPolicy::bounded(3),
            parse_amount,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
