use std::io::{self, Write};

use serde::Serialize;

use crate::report::AnnotationObject;

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_report(objects: &[AnnotationObject]) -> io::Result<()> {
        Self::print_json(objects)
    }

    fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}
