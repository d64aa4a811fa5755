pub mod va_bca;
