use hb_context::*;

// Example #1
// A fresh error, created where the failure is noticed.
fn open_store(path: &str) -> Result<(), ChainedError> {
    Err(chained!(format!("store '{}' is locked", path), 11))
}

// Example #2
// Wrapping an io::Error. It has no history so its text is merged into the new message:
// "could not read index, index.db not found"
fn read_index() -> Result<Vec<u8>, ChainedError> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "index.db not found"))
        .wrap_foreign("could not read index")
}

// Example #3
// The context attribute wraps the error from open_store in a frame named after this function.
#[context("could not start with store '{path}'")]
fn start(path: &str) -> Result<(), ChainedError> {
    open_store(path)?;
    Ok(())
}

// Example #4
// A second layer. The history is flattened:
//   run() | startup failed
//       start() | could not start with store 'main'
//       open_store() | [code=11] store 'main' is locked
fn run() -> Result<(), ChainedError> {
    start("main").map_err(|e| wrap_chained!("startup failed", e))
}

// Example #5
// Collecting failures in a slot and merging a sibling failure.
fn check_all() -> Option<ChainedError> {
    let mut slot: Option<ChainedError> = None;
    safe_chain!(slot, "checks failed");
    slot = read_index().err();
    safe_chain!(slot, "checks failed", 3);
    if let (Some(e), Err(sibling)) = (slot.as_mut(), run()) {
        e.append(sibling);
    }
    slot
}

fn main() {
    let _ = env_logger::builder().is_test(true).try_init();

    if let Err(e) = run() {
        println!("Summary:\n{}\n", e);
        println!("Full chain:\n{:#}\n", e);
    }
    if let Err(e) = read_index() {
        println!("Foreign:\n{}\n", e);
    }
    if let Some(e) = check_all() {
        e.log_error();
        println!("Collected:\n{:#}\n", e);
    }
}

#[test]
fn examples_render() {
    let e = run().unwrap_err();
    assert!(e.summary().ends_with("run() | startup failed"));
    assert_eq!(e.history().len(), 2);
    assert!(e.full_chain().contains("[code=11] store 'main' is locked"));

    let e = check_all().unwrap();
    assert_eq!(e.code(), 3);
    assert_eq!(e.history().len(), 4);
}
