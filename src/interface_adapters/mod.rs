// Interface adapters: outbound HTTP clients.

pub mod clients;
