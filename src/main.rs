use std::{env, path::Path};

use anyhow::{anyhow, Result};
use derive_more::Display;
use dotenv::dotenv;
use inquire::{InquireError, Select, Text};
use log::info;
use smartfield::config::{FormConfig, DEFAULT_FORM_FILE, FORM_FILE_VAR};
use smartfield::field::ValidatedField;
use smartfield::form::Form;
use smartfield::validation::ValidatorKind;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const LOG_FILE: &str = "./smartfield.log";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu. `enter` returns None when the menu wants to quit,
/// Some(()) when it should run again.
trait Menu {
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it quits, reporting errors without leaving
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

pub struct App {
    form: Form,
}

impl App {
    pub fn new(form: Form) -> Self {
        App { form }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Form: {}", self.form.title());
        self.enter_loop();
        Ok(())
    }

    fn show_summary(&self) {
        for field in self.form.fields() {
            if field.is_valid() {
                println!("[ok] {}: {}", field.header(), field.text());
            } else {
                println!("[!!] {}: {} ({})", field.header(), field.text(), field.error_message());
            }
        }
    }
}

impl Menu for App {
    /// Esc or Ctrl-C in any prompt leaves the application
    fn enter(&mut self) -> Result<MenuExit> {
        match self.run_choice() {
            Err(error) if is_cancelled(&error) => Ok(MENU_EXIT),
            other => other,
        }
    }
}

impl App {
    fn run_choice(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Fill the whole form")]
            FillForm,
            #[display("Edit one field")]
            FillField,
            #[display("Check a value")]
            CheckValue,
            #[display("Show form")]
            Summary,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::FillForm => {
                for field in self.form.fields_mut() {
                    fill_field(field)?;
                }
                if self.form.validate_all() {
                    info!("Form '{}' completed", self.form.title());
                    println!("[*] All fields are valid.");
                }
            }

            Choice::FillField => {
                let headers: Vec<String> =
                    self.form.fields().map(|f| f.header().to_owned()).collect();
                let header = Select::new("Which field?", headers).prompt()?;
                let field = self
                    .form
                    .field_mut(&header)
                    .ok_or(anyhow!("Unknown field"))?;
                fill_field(field)?;
            }

            Choice::CheckValue => {
                let kind =
                    Select::new("Which validator?", ValidatorKind::iter().collect()).prompt()?;
                let value = Text::new("Value:").prompt()?;

                let outcome = kind.build().check(&value);
                if outcome.is_valid {
                    println!("[*] Valid {}", kind);
                } else {
                    println!("[!] {}", outcome.error_message);
                }
            }

            Choice::Summary => self.show_summary(),

            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

/// Prompts for a field until its content is accepted
fn fill_field(field: &mut ValidatedField) -> Result<()> {
    loop {
        let answer = Text::new(field.header())
            .with_placeholder(field.placeholder())
            .with_initial_value(field.text())
            .prompt()?;

        // Submitting unchanged text still has to be checked
        if !field.set_text(answer) {
            field.revalidate();
        }

        if field.is_valid() {
            return Ok(());
        }

        println!("{}", field.error_message());
    }
}

fn is_cancelled(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

fn main() -> Result<()> {
    dotenv().ok();
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;

    let path = env::var(FORM_FILE_VAR).unwrap_or_else(|_| DEFAULT_FORM_FILE.to_owned());
    let config = FormConfig::open(Path::new(&path))?;

    App::new(Form::from(&config)).start()
}
