pub mod u601_trigger_run;
