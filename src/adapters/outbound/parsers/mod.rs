/// Manifest parser adapters
mod pom_xml_parser;

pub use pom_xml_parser::PomXmlParser;
