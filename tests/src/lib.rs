mod hosts_file;
