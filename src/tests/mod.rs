mod jody;
mod pointer;
