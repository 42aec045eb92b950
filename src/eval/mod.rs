pub(crate) mod calculator;
