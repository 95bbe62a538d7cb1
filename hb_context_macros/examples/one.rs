use hb_context::{chained, context, ChainedError};

struct Eh;

impl Eh {
    #[context("Something")]
    pub fn eh() -> Result<(), ChainedError> {
        Eh::b()?;
        Ok(())
    }

    #[context("Better?")]
    pub fn hm() -> Result<(), ChainedError> {
        Err(chained!("inner"))
    }

    pub fn b() -> Result<(), ChainedError> {
        Err(chained!("inner"))
    }
}

fn main() {
    if let Err(e) = Eh::eh() {
        println!("{:#}", e);
    }
    if let Err(e) = Eh::hm() {
        println!("{:#}", e);
    }
}
