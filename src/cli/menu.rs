use std::io::{self, BufRead, Write};
use std::str::FromStr;

use bank_ledger::{Decimal, LedgerError, Session};

const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

/// Interactive front end over a `Session`.
///
/// Generic over its input and output so it can be driven by stdin, a script
/// file, or an in-memory buffer.
pub struct Menu<'s, R, W> {
    input: R,
    output: W,
    session: &'s mut Session,
}

impl<'s, R: BufRead, W: Write> Menu<'s, R, W> {
    pub fn new(input: R, output: W, session: &'s mut Session) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    /// Run until `q` or end of input
    pub fn run(mut self) -> io::Result<()> {
        loop {
            let Some(option) = self.prompt(MENU)? else {
                log::debug!("End of input, leaving menu");
                break;
            };

            match option.as_str() {
                "d" => self.deposit()?,
                "s" => self.withdraw()?,
                "e" => self.statement()?,
                "nu" => self.new_client()?,
                "nc" => self.new_account()?,
                "lc" => self.list_accounts()?,
                "q" => break,
                other => {
                    log::debug!("Unknown menu option {other:?}");
                    self.failure("Invalid option, please try again.")?;
                }
            }
        }

        writeln!(self.output, "\n=== Thank you for banking with us! ===")?;
        self.output.flush()
    }

    fn deposit(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.existing_client()? else {
            return Ok(());
        };
        let Some(amount) = self.amount("Deposit amount: ")? else {
            return Ok(());
        };

        match self.session.deposit(&tax_id, amount) {
            Ok(()) => self.success("Deposit completed!"),
            Err(e) => self.report(&e),
        }
    }

    fn withdraw(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.existing_client()? else {
            return Ok(());
        };
        let Some(amount) = self.amount("Withdrawal amount: ")? else {
            return Ok(());
        };

        match self.session.withdraw(&tax_id, amount) {
            Ok(()) => self.success("Withdrawal completed!"),
            Err(e) => self.report(&e),
        }
    }

    fn statement(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.existing_client()? else {
            return Ok(());
        };

        match self.session.statement(&tax_id) {
            Ok(statement) => writeln!(self.output, "\n{statement}\n"),
            Err(e) => self.report(&e),
        }
    }

    fn new_client(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Tax ID (digits only): ")? else {
            return Ok(());
        };
        if self.session.find_client(&tax_id).is_ok() {
            return self.report(&LedgerError::DuplicateClient { tax_id });
        }

        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Date of birth (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let Some(address) =
            self.prompt("Address (street, number - district - city/state): ")?
        else {
            return Ok(());
        };

        match self
            .session
            .create_client(&tax_id, &name, &birth_date, &address)
        {
            Ok(_) => self.success("Client created!"),
            Err(e) => self.report(&e),
        }
    }

    fn new_account(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax ID: ")? else {
            return Ok(());
        };

        match self.session.create_account(&tax_id) {
            Ok(number) => self.success(&format!("Account {number} created!")),
            Err(e) => self.report(&e),
        }
    }

    fn list_accounts(&mut self) -> io::Result<()> {
        let summaries = self.session.account_summaries();
        if summaries.is_empty() {
            return self.failure("No accounts registered.");
        }

        for summary in summaries {
            writeln!(self.output, "{}", "=".repeat(100))?;
            writeln!(self.output, "{summary}")?;
        }
        Ok(())
    }

    /// Ask for a tax ID and make sure the client exists before asking for anything else
    fn existing_client(&mut self) -> io::Result<Option<String>> {
        let Some(tax_id) = self.prompt("Client tax ID: ")? else {
            return Ok(None);
        };
        if let Err(e) = self.session.find_client(&tax_id) {
            self.report(&e)?;
            return Ok(None);
        }
        Ok(Some(tax_id))
    }

    fn amount(&mut self, label: &str) -> io::Result<Option<Decimal>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match Decimal::from_str(&raw) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                log::debug!("Could not parse amount {raw:?}: {e}");
                self.failure(&format!("Invalid number: {raw}"))?;
                Ok(None)
            }
        }
    }

    /// Print `label` and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "\n=== {message} ===")
    }

    fn failure(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "\n@@@ {message} @@@")
    }

    fn report(&mut self, error: &LedgerError) -> io::Result<()> {
        self.failure(&format!("Operation failed! {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_ledger::LedgerConfig;
    use rust_decimal_macros::dec;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(script.as_bytes(), &mut output, session).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    const SETUP: &str = "nu\n111\nAna Souza\n01-02-1990\nRua A, 1\nnc\n111\n";

    #[test]
    fn test_create_client_and_account() {
        let mut session = Session::new(LedgerConfig::default());
        let output = run_script(&mut session, &format!("{SETUP}q\n"));

        assert!(output.contains("=== Client created! ==="));
        assert!(output.contains("=== Account 1 created! ==="));
        assert!(output.contains("Thank you"));
        assert_eq!(session.primary_account("111").unwrap().number(), 1);
    }

    #[test]
    fn test_deposit_withdraw_and_statement() {
        let mut session = Session::default();
        let script = format!("{SETUP}d\n111\n100\ns\n111\n600\ns\n111\n40\ne\n111\nq\n");
        let output = run_script(&mut session, &script);

        assert!(output.contains("Deposit completed!"));
        assert!(output.contains("Withdrawal of 600 exceeds the limit of 500"));
        assert!(output.contains("Withdrawal completed!"));
        assert!(output.contains("Balance:\n\t$ 60.00"));
        assert_eq!(session.primary_account("111").unwrap().balance(), dec!(60));
    }

    #[test]
    fn test_unknown_client_skips_amount_prompt() {
        let mut session = Session::default();
        let output = run_script(&mut session, "d\n999\nq\n");

        assert!(output.contains("Client 999 not found"));
        assert!(!output.contains("Deposit amount"));
    }

    #[test]
    fn test_client_without_account() {
        let mut session = Session::default();
        let script = "nu\n111\nAna\n01-02-1990\nRua A\ne\n111\nq\n";
        let output = run_script(&mut session, script);

        assert!(output.contains("Client 111 has no account"));
    }

    #[test]
    fn test_duplicate_client_stops_before_details() {
        let mut session = Session::default();
        let script = "nu\n111\nAna\n01-02-1990\nRua A\nnu\n111\nq\n";
        let output = run_script(&mut session, script);

        assert!(output.contains("A client with tax ID 111 already exists"));
        assert_eq!(session.clients().len(), 1);
    }

    #[test]
    fn test_invalid_amount_input_is_reported() {
        let mut session = Session::default();
        let script = format!("{SETUP}d\n111\nabc\nq\n");
        let output = run_script(&mut session, &script);

        assert!(output.contains("Invalid number: abc"));
        assert!(session.primary_account("111").unwrap().history().is_empty());
    }

    #[test]
    fn test_list_accounts() {
        let mut session = Session::default();
        let empty = run_script(&mut session, "lc\nq\n");
        assert!(empty.contains("No accounts registered."));

        let output = run_script(&mut session, &format!("{SETUP}lc\nq\n"));
        assert!(output.contains("Holder:\t\tAna Souza"));
    }

    #[test]
    fn test_invalid_option_and_end_of_input() {
        let mut session = Session::default();
        let output = run_script(&mut session, "x\n");

        assert!(output.contains("Invalid option, please try again."));
        assert!(output.contains("Thank you"));
    }
}
