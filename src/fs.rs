use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::config::Format;
use crate::level::Level;
use crate::parser;
use crate::LoadLevel;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadLevel for str {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let level = read_file(self)?;
        Ok(parser::parse(&level)?)
    }

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>> {
        let level = read_file(self)?;
        Ok(parser::parse_format(&level, format)?)
    }
}
