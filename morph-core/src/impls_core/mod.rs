mod option;
mod scalar;
mod time;
