pub mod a001_statute_qa;
