//! Unit tests mirroring the `src` tree one file per module

mod io;
