use clap::{Arg, ArgMatches, Command};
use lamport_ots::*;
use std::{
    convert::TryFrom,
    error::Error,
    fmt,
    fs::{read, remove_file, write},
    mem::size_of,
    process::exit,
};

const GENKEY_COMMAND: &str = "genkey";
const VERIFY_COMMAND: &str = "verify";
const SIGN_COMMAND: &str = "sign";
const SIZES_COMMAND: &str = "sizes";

const KEYNAME_PARAMETER: &str = "keyname";
const MESSAGE_PARAMETER: &str = "file";
const DIGEST_PARAMETER: &str = "digest";
const SEED_PARAMETER: &str = "seed";
const FULL_PARAMETER: &str = "full";

const KEY_MODE_FULL: u8 = 0;
const KEY_MODE_SEED: u8 = 1;

/// Digest type id (big endian u32) followed by the key mode marker.
const PRIVATE_KEY_HEADER_SIZE: usize = size_of::<u32>() + size_of::<u8>();

#[derive(Debug)]
struct DemoError(String);

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "There is an error: {}", self.0)
    }
}

impl Error for DemoError {}

impl DemoError {
    pub fn raise<R>(message: &str) -> Result<R, Box<dyn Error>> {
        Err(Box::new(Self(String::from(message))))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let command = Command::new("Lamport Demo")
        .about("Generates Lamport one-time key pairs, signs and verifies files")
        .subcommand(
            Command::new(GENKEY_COMMAND)
                .arg(Arg::new(KEYNAME_PARAMETER).required(true))
                .arg(
                    Arg::new(DIGEST_PARAMETER)
                        .required(false)
                        .help("Digest algorithm: SHA256, SHA384 or SHA512")
                        .default_value("SHA256"),
                )
                .arg(
                    Arg::new(SEED_PARAMETER)
                        .long(SEED_PARAMETER)
                        .required(false)
                        .takes_value(true)
                        .value_name("seed")
                        .help("Hex encoded 32 byte seed; a random seed is used otherwise"),
                )
                .arg(
                    Arg::new(FULL_PARAMETER)
                        .long(FULL_PARAMETER)
                        .conflicts_with(SEED_PARAMETER)
                        .help("Store the full private key instead of a seed"),
                ),
        )
        .subcommand(
            Command::new(VERIFY_COMMAND)
                .arg(Arg::new(KEYNAME_PARAMETER).required(true))
                .arg(
                    Arg::new(MESSAGE_PARAMETER)
                        .required(true)
                        .help("File to verify"),
                ),
        )
        .subcommand(
            Command::new(SIGN_COMMAND)
                .about("Signs a file and removes the private key afterwards")
                .arg(Arg::new(KEYNAME_PARAMETER).required(true))
                .arg(Arg::new(MESSAGE_PARAMETER).required(true)),
        )
        .subcommand(Command::new(SIZES_COMMAND).about("Prints key and signature sizes"));

    let matches = command.get_matches();

    if let Some(args) = matches.subcommand_matches(GENKEY_COMMAND) {
        genkey(args)?;
        println!("Keys successful generated!");
        return Ok(());
    }

    if let Some(args) = matches.subcommand_matches(VERIFY_COMMAND) {
        if verify(args)? {
            println!("Successful!");
            exit(0);
        } else {
            println!("Wrong signature");
            exit(-1);
        }
    }

    if let Some(args) = matches.subcommand_matches(SIGN_COMMAND) {
        sign(args)?;
        println!("Signature successful generated!");
        return Ok(());
    }

    if matches.subcommand_matches(SIZES_COMMAND).is_some() {
        print_sizes();
    }

    Ok(())
}

fn genkey(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let keyname = get_parameter(KEYNAME_PARAMETER, args);
    let lamport = LamportOts::from_name(&get_parameter(DIGEST_PARAMETER, args))?;

    let mut private_key_data = Vec::new();
    private_key_data.extend_from_slice(&lamport.algorithm().type_id().to_be_bytes());

    let public_key = if args.is_present(FULL_PARAMETER) {
        let (private_key, public_key) = lamport.generate_keys();
        private_key_data.push(KEY_MODE_FULL);
        private_key_data.extend_from_slice(&private_key.to_binary_representation());
        public_key
    } else {
        let (seed, public_key) = match args.value_of(SEED_PARAMETER) {
            Some(seed) => {
                let seed = Seed::try_from(hex::decode(seed)?.as_slice())?;
                let public_key =
                    lamport.public_key(&lamport.regenerate_private_key(seed.as_slice())?)?;
                (seed, public_key)
            }
            None => lamport.generate_keys_with_seed(),
        };
        private_key_data.push(KEY_MODE_SEED);
        private_key_data.extend_from_slice(seed.as_slice());
        public_key
    };

    let mut public_key_data = Vec::new();
    public_key_data.extend_from_slice(&lamport.algorithm().type_id().to_be_bytes());
    public_key_data.extend_from_slice(&public_key.to_binary_representation());

    write(get_private_key_name(&keyname), &private_key_data)?;
    write(get_public_key_name(&keyname), &public_key_data)?;

    Ok(())
}

fn sign(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let keyname = get_parameter(KEYNAME_PARAMETER, args);
    let message_name = get_parameter(MESSAGE_PARAMETER, args);

    let private_key_name = get_private_key_name(&keyname);
    let private_key_data = read(&private_key_name)?;
    let message_data = read(&message_name)?;

    if private_key_data.len() < PRIVATE_KEY_HEADER_SIZE {
        return DemoError::raise("Private key file is too short");
    }
    let lamport = LamportOts::from_type_id(read_type_id(&private_key_data))?;
    let (mode, key) = private_key_data[size_of::<u32>()..]
        .split_first()
        .expect("Header length was checked");

    let key_material = match *mode {
        KEY_MODE_FULL => KeyMaterial::Full(PrivateKey::from_binary_representation(
            lamport.algorithm(),
            key,
        )?),
        KEY_MODE_SEED => KeyMaterial::Seed(Seed::try_from(key)?),
        _ => return DemoError::raise("Unknown private key mode"),
    };
    let signing_key = SigningKey::new(lamport, key_material)?;

    let signature = signature::Signer::try_sign(&signing_key, &message_data)?;
    write(get_signature_name(&message_name), signature.as_ref())?;

    // One-time key: it must not sign anything else.
    remove_file(&private_key_name)?;

    Ok(())
}

fn verify(args: &ArgMatches) -> Result<bool, Box<dyn Error>> {
    let keyname = get_parameter(KEYNAME_PARAMETER, args);
    let message_name = get_parameter(MESSAGE_PARAMETER, args);

    let public_key_data = read(get_public_key_name(&keyname))?;
    let signature_data = read(get_signature_name(&message_name))?;
    let message_data = read(&message_name)?;

    if public_key_data.len() < size_of::<u32>() {
        return DemoError::raise("Public key file is too short");
    }
    let lamport = LamportOts::from_type_id(read_type_id(&public_key_data))?;
    let public_key = PublicKey::from_binary_representation(
        lamport.algorithm(),
        &public_key_data[size_of::<u32>()..],
    )?;

    Ok(lamport.verify(
        &message_data,
        &Signature::from(signature_data),
        &public_key,
    ))
}

fn print_sizes() {
    println!(
        "{:<10} {:>16} {:>16} {:>16} {:>8} {:>10}",
        "Digest", "Private key [B]", "Public key [B]", "Signature [B]", "Seed [B]", "Reduction"
    );
    for algorithm in DigestAlgorithm::ALL {
        let lamport = LamportOts::new(algorithm);
        let reduction =
            (1.0 - lamport.seed_size() as f64 / lamport.private_key_size() as f64) * 100.0;
        println!(
            "{:<10} {:>16} {:>16} {:>16} {:>8} {:>9.2}%",
            algorithm.name(),
            lamport.private_key_size(),
            lamport.public_key_size(),
            lamport.signature_size(),
            lamport.seed_size(),
            reduction
        );
    }
}

fn read_type_id(data: &[u8]) -> u32 {
    let mut type_id = [0u8; size_of::<u32>()];
    type_id.copy_from_slice(&data[..size_of::<u32>()]);
    u32::from_be_bytes(type_id)
}

fn get_public_key_name(keyname: &str) -> String {
    keyname.to_string() + ".pub"
}

fn get_signature_name(message_name: &str) -> String {
    message_name.to_string() + ".sig"
}

fn get_private_key_name(private_key: &str) -> String {
    private_key.to_string() + ".prv"
}

fn get_parameter(name: &str, args: &ArgMatches) -> String {
    args.value_of(name)
        .expect("Parameter must be present.")
        .into()
}
