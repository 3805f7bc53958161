mod escape;
mod translate;
