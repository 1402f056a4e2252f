pub(crate) mod ltp;
