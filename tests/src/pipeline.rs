mod integration;
mod providers;
