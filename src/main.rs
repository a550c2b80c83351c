mod error;
mod ops;
mod store;
mod task;
mod ui;

use store::TaskStore;

fn main() -> anyhow::Result<()> {
    let store = TaskStore::default();
    ui::run(&store)?;
    Ok(())
}
