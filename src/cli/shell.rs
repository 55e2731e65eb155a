//! Interactive menu over a ledger

use crate::cli::input::{parse_amount_input, parse_optional_amount, parse_optional_date};
use crate::cli::output::{format_balance, format_record_list};
use crate::domain::{Record, SearchFilter};
use crate::error::Result;
use crate::infrastructure::LedgerRepository;
use std::io::{BufRead, Write};

const MENU: &str = "\nChoose an action:\n\
    1. Show balance\n\
    2. Add record\n\
    3. Edit record\n\
    4. Search records\n\
    5. Exit\n";

enum Flow {
    Continue,
    Exit,
}

/// Prompt loop reading answers from `input` and writing to `output`.
///
/// End of input ends the session like choosing exit. A non-numeric amount
/// or a malformed search date ends it with an error.
pub struct Shell<'a, S, R, W> {
    store: &'a S,
    input: R,
    output: W,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: LedgerRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a S, input: R, output: W) -> Self {
        Shell {
            store,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter action number: ")? else {
                return Ok(());
            };

            let flow = match choice.as_str() {
                "1" => self.show_balance()?,
                "2" => self.add_record()?,
                "3" => self.edit_record()?,
                "4" => self.search()?,
                "5" => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice, try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for the four record fields, prefixing each prompt
    fn prompt_record(&mut self, prefix: &str) -> Result<Option<Record>> {
        let Some(date) = self.prompt(&format!("Enter {}date (YYYY-MM-DD): ", prefix))? else {
            return Ok(None);
        };
        let Some(category) = self.prompt(&format!("Enter {}category (Income/Expense): ", prefix))?
        else {
            return Ok(None);
        };
        let Some(amount) = self.prompt(&format!("Enter {}amount: ", prefix))? else {
            return Ok(None);
        };
        let amount = parse_amount_input(&amount)?;
        let Some(description) = self.prompt(&format!("Enter {}description: ", prefix))? else {
            return Ok(None);
        };

        Ok(Some(Record::new(date, category, amount, description)))
    }

    fn show_balance(&mut self) -> Result<Flow> {
        let balance = self.store.get_balance()?;
        write!(self.output, "{}", format_balance(&balance))?;
        Ok(Flow::Continue)
    }

    fn add_record(&mut self) -> Result<Flow> {
        let Some(record) = self.prompt_record("")? else {
            return Ok(Flow::Exit);
        };
        self.store.add_record(&record)?;
        writeln!(self.output, "Record added.")?;
        Ok(Flow::Continue)
    }

    fn edit_record(&mut self) -> Result<Flow> {
        let Some(old) = self.prompt_record("current ")? else {
            return Ok(Flow::Exit);
        };
        let Some(new) = self.prompt_record("new ")? else {
            return Ok(Flow::Exit);
        };

        if self.store.edit_record(&old, &new) {
            writeln!(self.output, "Record updated.")?;
        } else {
            writeln!(self.output, "Record not found or could not be updated.")?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(category) = self.prompt("Enter category (Income/Expense), or leave blank: ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(start) = self.prompt("Enter start date (YYYY-MM-DD), or leave blank: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(end) = self.prompt("Enter end date (YYYY-MM-DD), or leave blank: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(min) = self.prompt("Enter minimum amount, or leave blank: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(max) = self.prompt("Enter maximum amount, or leave blank: ")? else {
            return Ok(Flow::Exit);
        };

        let filter = SearchFilter {
            category: Some(category).filter(|c| !c.is_empty()),
            start_date: parse_optional_date(&start)?,
            end_date: parse_optional_date(&end)?,
            min_amount: parse_optional_amount(&min)?,
            max_amount: parse_optional_amount(&max)?,
        };

        let results = self.store.search_records(&filter)?;
        if !results.is_empty() {
            writeln!(self.output, "Search results:")?;
        }
        writeln!(self.output, "{}", format_record_list(&results).trim_end())?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::infrastructure::FileLedgerStore;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_session(store: &FileLedgerStore, script: &str) -> (Result<()>, String) {
        let mut output = Vec::new();
        let result = Shell::new(store, Cursor::new(script.to_string()), &mut output).run();
        (result, String::from_utf8(output).unwrap())
    }

    fn store_in(temp: &TempDir) -> FileLedgerStore {
        FileLedgerStore::open(temp.path().join("records.txt")).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let (result, output) = run_session(&store, "5\n");
        assert!(result.is_ok());
        assert!(output.contains("1. Show balance"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let (result, _) = run_session(&store, "");
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_choice() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let (_, output) = run_session(&store, "9\n5\n");
        assert!(output.contains("Invalid choice"));
    }

    #[test]
    fn test_add_then_balance() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let script = "2\n2025-01-01\nIncome\n100\nsalary\n\
                      2\n2025-01-02\nExpense\n40.5\ngroceries\n\
                      1\n5\n";
        let (result, output) = run_session(&store, script);

        assert!(result.is_ok());
        assert!(output.contains("Record added."));
        assert!(output.contains("Current balance: 59.50"));
        assert!(output.contains("Incomes: 100.00"));
        assert!(output.contains("Expenses: 40.50"));
    }

    #[test]
    fn test_non_numeric_amount_fails() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let (result, _) = run_session(&store, "2\n2025-01-01\nIncome\nlots\nsalary\n5\n");
        assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
        assert!(store.list_records().unwrap().is_empty());
    }

    #[test]
    fn test_edit_record() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store
            .add_record(&Record::new("2025-01-01", "Expense", 10.0, "coffee"))
            .unwrap();

        let script = "3\n2025-01-01\nExpense\n10\ncoffee\n2025-01-01\nExpense\n12\ncoffee\n5\n";
        let (_, output) = run_session(&store, script);

        assert!(output.contains("Record updated."));
        let records = store.list_records().unwrap();
        assert_eq!(records[0].amount(), Some(12.0));
    }

    #[test]
    fn test_edit_missing_record() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let script = "3\n2025-01-01\nExpense\n10\ncoffee\n2025-01-01\nExpense\n12\ncoffee\n5\n";
        let (_, output) = run_session(&store, script);
        assert!(output.contains("Record not found"));
    }

    #[test]
    fn test_search_with_blank_criteria() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store
            .add_record(&Record::new("2025-01-01", "Income", 100.0, "salary"))
            .unwrap();
        store
            .add_record(&Record::new("2025-01-05", "Expense", 20.0, "books"))
            .unwrap();

        let (_, output) = run_session(&store, "4\nExpense\n\n\n\n\n5\n");
        assert!(output.contains("Search results:"));
        assert!(output.contains("books"));
        assert!(!output.contains("salary"));
    }

    #[test]
    fn test_search_nothing_found() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let (_, output) = run_session(&store, "4\n\n2025-01-01\n2025-01-31\n\n\n5\n");
        assert!(output.contains("Nothing found."));
    }

    #[test]
    fn test_search_bad_date_fails() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let (result, _) = run_session(&store, "4\n\nsoon\n\n\n\n5\n");
        assert!(matches!(result, Err(LedgerError::InvalidDate(_))));
    }
}
