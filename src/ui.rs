use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::error::Result;
use crate::ops::{self, EditField};
use crate::store::TaskStore;
use crate::task::{Status, Task};

/// Menu actions, selected by the digits 1-6. `Exit` is terminal; every
/// other action returns to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Add,
    Edit,
    Complete,
    Delete,
    Exit,
}

impl Action {
    fn from_choice(choice: &str) -> Option<Action> {
        match choice {
            "1" => Some(Action::List),
            "2" => Some(Action::Add),
            "3" => Some(Action::Edit),
            "4" => Some(Action::Complete),
            "5" => Some(Action::Delete),
            "6" => Some(Action::Exit),
            _ => None,
        }
    }
}

/// The main menu loop. Each mutating action reloads the store, runs one
/// operation, and saves the result; listing only reloads. Operation
/// failures are reported and drop back to the menu, never out of the loop.
pub fn run(store: &TaskStore) -> Result<()> {
    loop {
        print_menu();
        let choice = prompt("Choose an option (1-6):")?;
        let Some(action) = Action::from_choice(&choice) else {
            report("Invalid choice. Please try again.");
            continue;
        };

        let records = store.load()?;
        let updated = match action {
            Action::List => {
                render_tasks(&ops::tasks(&records));
                None
            }
            Action::Add => add_flow(&records)?,
            Action::Edit => edit_flow(&records)?,
            Action::Complete => complete_flow(&records)?,
            Action::Delete => delete_flow(&records)?,
            Action::Exit => {
                println!();
                println!("{}", "Thank you for using the task list!".green());
                println!("Your tasks are saved in: {}", store.path().display());
                return Ok(());
            }
        };
        if let Some(records) = updated {
            store.save(&records)?;
        }
    }
}

fn add_flow(records: &[String]) -> Result<Option<Vec<String>>> {
    print_header("ADD A NEW TASK");
    let title = prompt("Task title:")?;
    let description = prompt("Task description:")?;
    match ops::add(records, &title, &description) {
        Ok((updated, id)) => {
            success(&format!("Task added with id {}.", id));
            Ok(Some(updated))
        }
        Err(err) => {
            report(&err.to_string());
            Ok(None)
        }
    }
}

fn edit_flow(records: &[String]) -> Result<Option<Vec<String>>> {
    print_header("EDIT A TASK");
    let tasks = ops::tasks(records);
    if tasks.is_empty() {
        report("There are no tasks to edit.");
        return Ok(None);
    }
    render_tasks(&tasks);

    let id = prompt("Id of the task to edit:")?;
    let current = match ops::find(records, &id) {
        Ok((_, task)) => task,
        Err(err) => {
            report(&err.to_string());
            return Ok(None);
        }
    };

    println!("1. Edit the title");
    println!("2. Edit the description");
    println!("3. Edit both");
    let field = match prompt("Choose an option (1-3):")?.as_str() {
        "1" => EditField::Title,
        "2" => EditField::Description,
        "3" => EditField::Both,
        _ => {
            report("Invalid choice. Please try again.");
            return Ok(None);
        }
    };

    // A blank answer keeps the current value.
    let mut new_title = String::new();
    let mut new_description = String::new();
    if matches!(field, EditField::Title | EditField::Both) {
        new_title = prompt(&format!("New title (currently '{}'):", current.title))?;
    }
    if matches!(field, EditField::Description | EditField::Both) {
        new_description = prompt(&format!(
            "New description (currently '{}'):",
            current.description
        ))?;
    }

    match ops::edit(records, &id, field, &new_title, &new_description) {
        Ok(updated) => {
            success("Task updated.");
            Ok(Some(updated))
        }
        Err(err) => {
            report(&err.to_string());
            Ok(None)
        }
    }
}

fn complete_flow(records: &[String]) -> Result<Option<Vec<String>>> {
    print_header("MARK A TASK COMPLETE");
    let tasks = ops::tasks(records);
    if tasks.is_empty() {
        report("There are no tasks to mark.");
        return Ok(None);
    }
    render_tasks(&tasks);

    let id = prompt("Id of the completed task:")?;
    match ops::mark_complete(records, &id) {
        Ok((updated, task)) => {
            success(&format!("Task '{}' marked as complete.", task.title));
            Ok(Some(updated))
        }
        Err(err) => {
            report(&err.to_string());
            Ok(None)
        }
    }
}

fn delete_flow(records: &[String]) -> Result<Option<Vec<String>>> {
    print_header("DELETE A TASK");
    let tasks = ops::tasks(records);
    if tasks.is_empty() {
        report("There are no tasks to delete.");
        return Ok(None);
    }
    render_tasks(&tasks);

    let id = prompt("Id of the task to delete:")?;
    match ops::delete(records, &id) {
        Ok((updated, task)) => {
            success(&format!("Task '{}' deleted.", task.title));
            Ok(Some(updated))
        }
        Err(err) => {
            report(&err.to_string());
            Ok(None)
        }
    }
}

fn render_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        report("There are no tasks.");
        return;
    }
    println!();
    println!("{}", "TASK LIST".bold());
    for task in tasks {
        let marker = match task.status {
            Status::Complete => "[x]".green(),
            Status::Incomplete => "[ ]".yellow(),
        };
        println!(
            "{} {} {}",
            marker,
            format!("#{}", task.id).cyan(),
            task.title.as_str().bold()
        );
        if !task.description.is_empty() {
            println!("       {}", task.description);
        }
        println!("       Status: {}", task.status.as_str());
    }
    println!();
}

fn print_menu() {
    println!();
    println!("{}", "==============================".cyan());
    println!("{}", "          TASK LIST".bold());
    println!("{}", "==============================".cyan());
    println!("1. Show all tasks");
    println!("2. Add a new task");
    println!("3. Edit a task");
    println!("4. Mark a task complete");
    println!("5. Delete a task");
    println!("6. Exit");
}

fn print_header(title: &str) {
    println!();
    println!("{}", title.bold());
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{} ", message);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn success(message: &str) {
    println!("{}", message.green());
}

fn report(message: &str) {
    println!("{}", message.red());
}
