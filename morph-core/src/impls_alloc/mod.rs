mod boxed;
mod string;
mod vec;
