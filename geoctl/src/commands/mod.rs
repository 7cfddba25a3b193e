pub(crate) mod locations;
