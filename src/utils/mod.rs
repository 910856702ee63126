pub(crate) mod parsers;
