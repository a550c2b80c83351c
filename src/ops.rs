//! CRUD operations over the stored record sequence. Every operation takes
//! the raw lines as loaded from the store and returns a fresh sequence;
//! persisting the result is the shell's job. Ids coming from user input
//! arrive as raw strings and are parsed here, so every entry point guards
//! against a malformed id the same way.

use crate::error::{Result, TaskError};
use crate::task::{Status, Task, SEPARATOR};

/// Which of the editable fields an Edit should replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Description,
    Both,
}

/// Decodes every record, silently skipping lines that are not tasks.
pub fn tasks(records: &[String]) -> Vec<Task> {
    records.iter().filter_map(|line| Task::decode(line)).collect()
}

/// Appends a new incomplete task and returns the extended sequence along
/// with the assigned id.
pub fn add(records: &[String], title: &str, description: &str) -> Result<(Vec<String>, u32)> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    ensure_no_separator(title)?;
    let description = description.trim();
    ensure_no_separator(description)?;

    let id = next_id(records);
    let task = Task {
        id,
        title: title.to_string(),
        description: description.to_string(),
        status: Status::Incomplete,
    };
    let mut updated = records.to_vec();
    updated.push(task.encode());
    Ok((updated, id))
}

/// Replaces title and/or description of the first task matching `id`.
/// A blank new value keeps the current one; status is never touched.
pub fn edit(
    records: &[String],
    id: &str,
    field: EditField,
    new_title: &str,
    new_description: &str,
) -> Result<Vec<String>> {
    let (index, mut task) = find(records, id)?;

    if matches!(field, EditField::Title | EditField::Both) {
        let new_title = new_title.trim();
        if !new_title.is_empty() {
            ensure_no_separator(new_title)?;
            task.title = new_title.to_string();
        }
    }
    if matches!(field, EditField::Description | EditField::Both) {
        let new_description = new_description.trim();
        if !new_description.is_empty() {
            ensure_no_separator(new_description)?;
            task.description = new_description.to_string();
        }
    }

    let mut updated = records.to_vec();
    updated[index] = task.encode();
    Ok(updated)
}

/// Marks the first task matching `id` complete. Marking an already
/// complete task is a no-op in effect. Returns the updated sequence and
/// the updated task.
pub fn mark_complete(records: &[String], id: &str) -> Result<(Vec<String>, Task)> {
    let (index, mut task) = find(records, id)?;
    task.status = Status::Complete;
    let mut updated = records.to_vec();
    updated[index] = task.encode();
    Ok((updated, task))
}

/// Removes the first task matching `id`, preserving the order of the
/// rest. Returns the shortened sequence and the removed task.
pub fn delete(records: &[String], id: &str) -> Result<(Vec<String>, Task)> {
    let (index, task) = find(records, id)?;
    let mut updated = records.to_vec();
    updated.remove(index);
    Ok((updated, task))
}

/// Parses the id and locates the first matching record. Lines that fail
/// to decode are skipped during the search.
pub fn find(records: &[String], id: &str) -> Result<(usize, Task)> {
    let id = parse_id(id)?;
    records
        .iter()
        .enumerate()
        .find_map(|(index, line)| {
            Task::decode(line)
                .filter(|task| task.id == id)
                .map(|task| (index, task))
        })
        .ok_or(TaskError::NotFound(id))
}

fn parse_id(input: &str) -> Result<u32> {
    input.trim().parse().map_err(|_| TaskError::InvalidId)
}

fn ensure_no_separator(value: &str) -> Result<()> {
    if value.contains(SEPARATOR) {
        return Err(TaskError::SeparatorInField);
    }
    Ok(())
}

/// Next id is one past the highest decodable id, so a malformed trailing
/// line can neither break Add nor cause id reuse.
fn next_id(records: &[String]) -> u32 {
    records
        .iter()
        .filter_map(|line| Task::decode(line))
        .map(|task| task.id)
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn add_assigns_consecutive_ids_from_one() {
        let mut records = Vec::new();
        for (n, title) in ["first", "second", "third"].iter().enumerate() {
            let (updated, id) = add(&records, title, "").unwrap();
            assert_eq!(id, n as u32 + 1);
            records = updated;
        }
        let ids: Vec<u32> = tasks(&records).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn add_numbers_past_the_highest_surviving_id() {
        let records = store_of(&["1|a||Incomplete", "2|b||Incomplete", "3|c||Incomplete"]);
        let (records, _) = delete(&records, "2").unwrap();
        let (records, id) = add(&records, "d", "").unwrap();
        assert_eq!(id, 4);
        let ids: Vec<u32> = tasks(&records).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn add_rejects_blank_title() {
        let records = store_of(&["1|a||Incomplete"]);
        assert!(matches!(
            add(&records, "   ", "desc"),
            Err(TaskError::EmptyTitle)
        ));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn add_rejects_separator_in_fields() {
        let records = Vec::new();
        assert!(matches!(
            add(&records, "a|b", ""),
            Err(TaskError::SeparatorInField)
        ));
        assert!(matches!(
            add(&records, "a", "c|d"),
            Err(TaskError::SeparatorInField)
        ));
    }

    #[test]
    fn add_ignores_malformed_lines_when_numbering() {
        let records = store_of(&["1|a||Incomplete", "not a task"]);
        let (_, id) = add(&records, "b", "").unwrap();
        assert_eq!(id, 2);
    }

    #[test]
    fn edit_title_only_preserves_description_and_status() {
        let records = store_of(&["1|Buy milk|2% milk|Incomplete"]);
        let updated = edit(&records, "1", EditField::Title, "Buy bread", "").unwrap();
        assert_eq!(updated, vec!["1|Buy bread|2% milk|Incomplete".to_string()]);
    }

    #[test]
    fn edit_blank_value_keeps_current_field() {
        let records = store_of(&["1|Buy milk|2% milk|Complete"]);
        let updated = edit(&records, "1", EditField::Both, "", "whole milk").unwrap();
        assert_eq!(updated, vec!["1|Buy milk|whole milk|Complete".to_string()]);
    }

    #[test]
    fn edit_unknown_id_signals_not_found() {
        let records = store_of(&["1|a||Incomplete"]);
        assert!(matches!(
            edit(&records, "9", EditField::Both, "x", "y"),
            Err(TaskError::NotFound(9))
        ));
    }

    #[test]
    fn edit_malformed_id_signals_invalid_id() {
        let records = store_of(&["1|a||Incomplete"]);
        assert!(matches!(
            edit(&records, "abc", EditField::Title, "x", ""),
            Err(TaskError::InvalidId)
        ));
    }

    #[test]
    fn mark_complete_is_idempotent() {
        let records = store_of(&["1|a|b|Incomplete", "2|c|d|Incomplete"]);
        let (once, task) = mark_complete(&records, "1").unwrap();
        assert_eq!(task.status, Status::Complete);
        let (twice, _) = mark_complete(&once, "1").unwrap();
        assert_eq!(once, twice);
        assert_eq!(once[0], "1|a|b|Complete");
        assert_eq!(once[1], "2|c|d|Incomplete");
    }

    #[test]
    fn mark_complete_unknown_id_signals_not_found() {
        let records = store_of(&["1|a||Incomplete"]);
        assert!(matches!(
            mark_complete(&records, "7"),
            Err(TaskError::NotFound(7))
        ));
    }

    #[test]
    fn delete_removes_only_the_match_and_keeps_order() {
        let records = store_of(&[
            "1|a||Incomplete",
            "2|b||Incomplete",
            "3|c||Incomplete",
        ]);
        let (updated, removed) = delete(&records, "2").unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(
            updated,
            store_of(&["1|a||Incomplete", "3|c||Incomplete"])
        );
        assert!(matches!(
            find(&updated, "2"),
            Err(TaskError::NotFound(2))
        ));
    }

    #[test]
    fn delete_unknown_id_leaves_records_unchanged() {
        let records = store_of(&["1|a||Incomplete"]);
        assert!(matches!(delete(&records, "4"), Err(TaskError::NotFound(4))));
        assert_eq!(records, store_of(&["1|a||Incomplete"]));
    }

    #[test]
    fn delete_malformed_id_signals_invalid_id() {
        let records = store_of(&["1|a||Incomplete"]);
        assert!(matches!(delete(&records, "1.5"), Err(TaskError::InvalidId)));
    }

    #[test]
    fn tasks_skips_malformed_lines() {
        let records = store_of(&["1|a|b|Incomplete", "too|short", "oops"]);
        let decoded = tasks(&records);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, 1);
    }

    #[test]
    fn find_skips_undecodable_lines_during_search() {
        let records = store_of(&["bad|line", "2|b||Incomplete"]);
        let (index, task) = find(&records, "2").unwrap();
        assert_eq!(index, 1);
        assert_eq!(task.title, "b");
    }
}
